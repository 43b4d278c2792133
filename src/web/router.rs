//! Path shape → operation.

use clips_core::ClipboardName;

/// What a request path addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Index,
    /// `/random`
    Random,
    /// `/<name>`: the editor page
    Editor(ClipboardName),
    /// `/<name>/text`: raw clipboard text
    Text(ClipboardName),
    NotFound,
}

impl Route {
    /// Resolve a raw request path.
    ///
    /// Empty segments are ignored and each segment is percent-decoded. The
    /// `random` and `text` keywords match case-insensitively.
    pub fn resolve(path: &str) -> Self {
        let segments: Result<Vec<String>, _> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::decode(segment).map(|s| s.into_owned()))
            .collect();
        let Ok(segments) = segments else {
            return Self::NotFound;
        };

        match segments.as_slice() {
            [] => Self::Index,
            [name] if name.eq_ignore_ascii_case("random") => Self::Random,
            [name] => Self::Editor(ClipboardName::new(name)),
            [name, text] if text.eq_ignore_ascii_case("text") => {
                Self::Text(ClipboardName::new(name))
            }
            _ => Self::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(name: &str) -> Route {
        Route::Text(ClipboardName::new(name))
    }

    #[test]
    fn root_is_index() {
        assert_eq!(Route::resolve("/"), Route::Index);
        assert_eq!(Route::resolve(""), Route::Index);
    }

    #[test]
    fn random_keyword_is_case_insensitive() {
        assert_eq!(Route::resolve("/random"), Route::Random);
        assert_eq!(Route::resolve("/RANDOM"), Route::Random);
    }

    #[test]
    fn single_segment_is_editor() {
        assert_eq!(
            Route::resolve("/MyClip"),
            Route::Editor(ClipboardName::new("myclip"))
        );
    }

    #[test]
    fn text_endpoint_normalizes_name() {
        assert_eq!(Route::resolve("/Demo/text"), text("demo"));
        assert_eq!(Route::resolve("/demo/TEXT"), text("demo"));
        assert_eq!(Route::resolve("/random/text"), text("random"));
    }

    #[test]
    fn trailing_and_repeated_slashes_are_ignored() {
        assert_eq!(Route::resolve("/demo/text/"), text("demo"));
        assert_eq!(Route::resolve("//demo//text"), text("demo"));
    }

    #[test]
    fn segments_are_percent_decoded() {
        assert_eq!(Route::resolve("/my%20clip/text"), text("my clip"));
        assert_eq!(Route::resolve("/%C3%84pfel/text"), text("äpfel"));
    }

    #[test]
    fn invalid_utf8_escape_is_not_found() {
        assert_eq!(Route::resolve("/%FF/text"), Route::NotFound);
    }

    #[test]
    fn other_shapes_are_not_found() {
        assert_eq!(Route::resolve("/a/b"), Route::NotFound);
        assert_eq!(Route::resolve("/a/b/c"), Route::NotFound);
        assert_eq!(Route::resolve("/demo/text/extra"), Route::NotFound);
    }
}
