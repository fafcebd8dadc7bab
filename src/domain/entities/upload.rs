//! File received from a dashboard form.

use axum::body::Bytes;

/// Raster image formats accepted for uploads.
///
/// Uploads are served from the site's own origin, so anything a browser
/// could render as a document (HTML, SVG, XML) is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    Webp,
    Avif,
}

impl ImageFormat {
    /// Maps a declared MIME type (parameters ignored) to a format.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/png" => Some(ImageFormat::Png),
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/gif" => Some(ImageFormat::Gif),
            "image/webp" => Some(ImageFormat::Webp),
            "image/avif" => Some(ImageFormat::Avif),
            _ => None,
        }
    }

    /// File extension used for the stored object.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Webp => "webp",
            ImageFormat::Avif => "avif",
        }
    }

    /// True when `bytes` start with this format's signature.
    pub fn matches_signature(&self, bytes: &[u8]) -> bool {
        match self {
            ImageFormat::Png => bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
            ImageFormat::Jpeg => bytes.starts_with(&[0xFF, 0xD8, 0xFF]),
            ImageFormat::Gif => bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a"),
            ImageFormat::Webp => {
                bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP"
            }
            ImageFormat::Avif => {
                bytes.len() >= 12
                    && &bytes[4..8] == b"ftyp"
                    && matches!(&bytes[8..12], b"avif" | b"avis")
            }
        }
    }
}

/// An uploaded file held in memory until it is forwarded to object storage.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl UploadedFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The image format, when the declared content type is an accepted
    /// image type and the bytes carry that format's signature.
    ///
    /// The client's file name plays no part; a missing content type is
    /// rejected.
    pub fn image_format(&self) -> Option<ImageFormat> {
        self.content_type
            .as_deref()
            .and_then(ImageFormat::from_content_type)
            .filter(|format| format.matches_signature(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    fn file(name: &str, content_type: Option<&str>, bytes: &'static [u8]) -> UploadedFile {
        UploadedFile::new(
            name,
            content_type.map(str::to_string),
            Bytes::from_static(bytes),
        )
    }

    #[test]
    fn test_accepted_image() {
        assert_eq!(
            file("photo.PNG", Some("image/png"), PNG).image_format(),
            Some(ImageFormat::Png)
        );
        let jpeg = file("me", Some("IMAGE/JPEG; q=1"), b"\xFF\xD8\xFF\xE0\0\x10JFIF");
        assert_eq!(jpeg.image_format(), Some(ImageFormat::Jpeg));
        assert_eq!(
            file("a.gif", Some("image/gif"), b"GIF89a\x01\0").image_format(),
            Some(ImageFormat::Gif)
        );
        assert_eq!(
            file("a.webp", Some("image/webp"), b"RIFF\0\0\0\0WEBPVP8 ").image_format(),
            Some(ImageFormat::Webp)
        );
        assert_eq!(
            file("a.avif", Some("image/avif"), b"\0\0\0\x1cftypavif\0\0").image_format(),
            Some(ImageFormat::Avif)
        );
    }

    #[test]
    fn test_extension_comes_from_format_not_name() {
        let upload = file("evil.html", Some("image/png"), PNG);
        assert_eq!(upload.image_format().map(|f| f.extension()), Some("png"));
    }

    #[test]
    fn test_missing_content_type_rejected() {
        let script = file("x.html", None, b"<script>alert(1)</script>");
        assert!(script.image_format().is_none());
        assert!(file("a.png", None, PNG).image_format().is_none());
    }

    #[test]
    fn test_document_types_rejected() {
        let svg = file("x.svg", Some("image/svg+xml"), b"<svg onload=alert(1)>");
        assert!(svg.image_format().is_none());
        assert!(file("x.html", Some("text/html"), b"<html>").image_format().is_none());
        assert!(file("a.pdf", Some("application/pdf"), b"%PDF-1.7").image_format().is_none());
    }

    #[test]
    fn test_declared_type_must_match_bytes() {
        let html = file("x.png", Some("image/png"), b"<html><script>");
        assert!(html.image_format().is_none());
        assert!(file("x.gif", Some("image/gif"), PNG).image_format().is_none());
    }
}
