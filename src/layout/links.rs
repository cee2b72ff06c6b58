//! Link overlay: attach annotation URLs to tokens by origin containment.

use crate::model::{LinkAnnotation, Token};

/// Attach the URL of the first annotation containing each token's origin.
///
/// Only the origin point is tested, so a long label that runs past the right
/// edge of its annotation is still linked as a whole.
pub fn overlay_links(tokens: Vec<Token>, links: &[LinkAnnotation]) -> Vec<Token> {
    if links.is_empty() {
        return tokens;
    }

    tokens
        .into_iter()
        .map(|token| match find_link(&token, links) {
            Some(link) => {
                log::trace!("Linked {:?} -> {}", token.text, link.url);
                let url = link.url.clone();
                token.with_link(url)
            }
            None => token,
        })
        .collect()
}

/// First annotation whose rectangle contains the token origin.
pub fn find_link<'a>(token: &Token, links: &'a [LinkAnnotation]) -> Option<&'a LinkAnnotation> {
    links.iter().find(|link| link.contains(token.x, token.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(rect: [f32; 4], url: &str) -> LinkAnnotation {
        LinkAnnotation::new(rect, url)
    }

    #[test]
    fn test_inside_is_linked() {
        let tokens = vec![Token::new("site", 150.0, 700.0, "F1")];
        let out = overlay_links(tokens, &[link([100.0, 690.0, 200.0, 710.0], "https://a.dev")]);
        assert_eq!(out[0].link_url.as_deref(), Some("https://a.dev"));
    }

    #[test]
    fn test_outside_is_not_linked() {
        let tokens = vec![
            Token::new("left", 99.9, 700.0, "F1"),
            Token::new("above", 150.0, 710.1, "F1"),
        ];
        let out = overlay_links(tokens, &[link([100.0, 690.0, 200.0, 710.0], "https://a.dev")]);
        assert!(out.iter().all(|t| t.link_url.is_none()));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let rect = [100.0, 690.0, 200.0, 710.0];
        let corners = [
            (100.0, 690.0),
            (200.0, 710.0),
            (100.0, 710.0),
            (200.0, 690.0),
        ];
        for (x, y) in corners {
            let out = overlay_links(vec![Token::new("t", x, y, "F1")], &[link(rect, "u")]);
            assert!(out[0].is_linked(), "({}, {}) should be linked", x, y);
        }
    }

    #[test]
    fn test_first_match_wins() {
        let links = [
            link([0.0, 0.0, 100.0, 100.0], "https://first"),
            link([0.0, 0.0, 100.0, 100.0], "https://second"),
        ];
        let out = overlay_links(vec![Token::new("t", 50.0, 50.0, "F1")], &links);
        assert_eq!(out[0].link_url.as_deref(), Some("https://first"));
    }

    #[test]
    fn test_origin_only_containment() {
        // Label starts inside and runs far past the right edge.
        let token = Token::new("https://github.com/someone/long-repository", 190.0, 700.0, "F1");
        assert!(find_link(&token, &[link([100.0, 690.0, 200.0, 710.0], "u")]).is_some());
    }
}
