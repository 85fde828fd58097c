//! Preview media classification.
//!
//! A project's preview reference is rendered as playable video when its
//! file extension is a known video format, and as a static image
//! otherwise. There is no probing of the file itself; the reference is
//! only a string emitted for the host environment to resolve.

/// File extensions treated as video, compared case-insensitively.
const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mov", "m4v"];

/// How a preview reference should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Playable video panel.
    Video,
    /// Static image panel.
    Image,
}

impl MediaKind {
    /// Classify a media reference by its file extension.
    ///
    /// Anything without a recognized video extension is an image,
    /// including extensionless paths.
    pub fn from_path(path: &str) -> Self {
        let ext = path.rsplit('.').next().unwrap_or("");
        if path.contains('.') && VIDEO_EXTENSIONS.iter().any(|v| ext.eq_ignore_ascii_case(v)) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    /// Display label for the media panel.
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Video => "Video",
            MediaKind::Image => "Image",
        }
    }

    /// Glyph shown in the media panel.
    pub fn symbol(&self) -> &'static str {
        match self {
            MediaKind::Video => "▶",
            MediaKind::Image => "🖼",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_extensions() {
        assert_eq!(MediaKind::from_path("assets/projects/vehicle-preview.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_path("demo.webm"), MediaKind::Video);
        assert_eq!(MediaKind::from_path("clip.MOV"), MediaKind::Video);
        assert_eq!(MediaKind::from_path("clip.m4v"), MediaKind::Video);
    }

    #[test]
    fn test_image_fallback() {
        assert_eq!(MediaKind::from_path("assets/projects/hospital-preview.jpg"), MediaKind::Image);
        assert_eq!(MediaKind::from_path("photo.png"), MediaKind::Image);
        // No extension at all
        assert_eq!(MediaKind::from_path("preview"), MediaKind::Image);
        assert_eq!(MediaKind::from_path(""), MediaKind::Image);
        // Extension-like suffix that is not a video format
        assert_eq!(MediaKind::from_path("archive.mp4.txt"), MediaKind::Image);
    }
}
