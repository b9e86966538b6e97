//! Bare media lines
//!
//! A line whose trimmed content is nothing but a YouTube watch URL or an image URL is
//! replaced by embed markup. URLs inside running text are left alone.

use crate::error::RenderError;
use crate::pass::Pass;
use crate::postprocess::anchors::URI_COMPONENT;
use percent_encoding::utf8_percent_encode;
use std::borrow::Cow;
use url::Url;

const YOUTUBE_WATCH_PREFIXES: &[&str] = &[
    "https://www.youtube.com/watch",
    "https://youtube.com/watch",
    "https://m.youtube.com/watch",
    "http://www.youtube.com/watch",
    "http://youtube.com/watch",
];

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".svg", ".webp"];

const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaLine<'a> {
    /// A YouTube watch URL; `video_id` is the `v` query parameter, if any
    YouTube { video_id: Option<String> },
    /// An image URL, by extension
    Image { src: &'a str },
}

impl<'a> MediaLine<'a> {
    /// Classify `line`. Returns `None` for anything that is not a bare media URL.
    pub fn classify(line: &'a str) -> Option<Self> {
        let trimmed = line.trim();
        if YOUTUBE_WATCH_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
        {
            return Some(MediaLine::YouTube {
                video_id: youtube_video_id(trimmed),
            });
        }

        if IMAGE_EXTENSIONS.iter().any(|ext| trimmed.ends_with(ext)) {
            return Some(MediaLine::Image { src: trimmed });
        }

        None
    }

    pub fn to_html(&self) -> String {
        match self {
            MediaLine::YouTube { video_id } => youtube_embed(video_id.as_deref()),
            MediaLine::Image { src } => image_embed(src),
        }
    }
}

/// Extract the `v` query parameter of a watch URL.
pub fn youtube_video_id(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
}

/// Responsive 16:9 iframe for a YouTube video.
///
/// A missing id still produces an embed, pointing at `embed/undefined`.
pub fn youtube_embed(video_id: Option<&str>) -> String {
    let id = video_id.unwrap_or("undefined");
    let src = format!(
        "{YOUTUBE_EMBED_BASE}{}",
        utf8_percent_encode(id, URI_COMPONENT)
    );
    format!(
        "<iframe width=\"100%\" style=\"aspect-ratio:16/9\" src=\"{}\" allow=\"{IFRAME_ALLOW}\" allowfullscreen=\"\"></iframe>",
        html_escape::encode_double_quoted_attribute(&src)
    )
}

pub fn image_embed(src: &str) -> String {
    format!(
        "<img src=\"{}\" alt=\"\"/>",
        html_escape::encode_double_quoted_attribute(src)
    )
}

/// Replace the line with its embed if it is a bare media URL.
pub fn embed_line(line: &str) -> Cow<'_, str> {
    match MediaLine::classify(line) {
        Some(media) => Cow::Owned(media.to_html()),
        None => Cow::Borrowed(line),
    }
}

/// Source pass replacing bare media lines with embed markup.
pub struct MediaEmbeds;

impl Pass for MediaEmbeds {
    fn name(&self) -> &str {
        "media-embeds"
    }

    fn description(&self) -> &str {
        "Replaces lines consisting of a YouTube or image URL with embed markup"
    }

    fn apply(&self, input: &str) -> Result<String, RenderError> {
        Ok(input.split('\n').map(embed_line).collect::<Vec<_>>().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_line_becomes_iframe() {
        let html = embed_line("https://www.youtube.com/watch?v=abc123");
        assert!(html.starts_with("<iframe"));
        assert!(html.contains("src=\"https://www.youtube.com/embed/abc123\""));
        assert!(html.contains("aspect-ratio:16/9"));
    }

    #[test]
    fn video_id_keeps_dashes_and_underscores() {
        let html = embed_line("https://www.youtube.com/watch?v=a-b_c123");
        assert!(html.contains("src=\"https://www.youtube.com/embed/a-b_c123\""));
    }

    #[test]
    fn reserved_characters_in_video_id_are_encoded() {
        let html = youtube_embed(Some("a/b?c"));
        assert!(html.contains("embed/a%2Fb%3Fc\""));
    }

    #[test]
    fn video_id_is_read_from_any_query_position() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?list=PL1&v=xyz&t=4s"),
            Some("xyz".to_string())
        );
    }

    #[test]
    fn missing_video_id_degrades_to_undefined() {
        let html = embed_line("https://www.youtube.com/watch?list=PL1");
        assert!(html.contains("embed/undefined"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let html = embed_line("   https://youtube.com/watch?v=q1   ");
        assert!(html.contains("embed/q1"));
    }

    #[test]
    fn image_line_becomes_img() {
        let html = embed_line(" https://cdn.example.com/cat.webp ");
        assert_eq!(html, "<img src=\"https://cdn.example.com/cat.webp\" alt=\"\"/>");
    }

    #[test]
    fn image_src_is_attribute_escaped() {
        let html = embed_line("x\".png");
        assert_eq!(html, "<img src=\"x&quot;.png\" alt=\"\"/>");
    }

    #[test]
    fn urls_inside_sentences_are_untouched() {
        let line = "watch https://www.youtube.com/watch?v=abc123 now";
        assert_eq!(embed_line(line), line);
        let line = "see logo.png for details";
        assert_eq!(embed_line(line), line);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert_eq!(MediaLine::classify("photo.JPG"), None);
    }

    #[test]
    fn pass_preserves_other_lines_and_trailing_newline() {
        let out = MediaEmbeds
            .apply("# Title\nhttps://a.com/b.svg\ntext\n")
            .unwrap();
        assert_eq!(out, "# Title\n<img src=\"https://a.com/b.svg\" alt=\"\"/>\ntext\n");
    }
}
