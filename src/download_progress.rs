use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadProgress {
    pub file_name: String,
    /// `None` while the total size is unknown or zero.
    pub completed_percent: Option<f32>,
    pub downloaded_size: u64,
}

impl DownloadProgress {
    pub fn new(file_name: &str, downloaded_size: u64, total_size: Option<u64>) -> Self {
        Self {
            file_name: file_name.to_string(),
            completed_percent: completed_percent(downloaded_size, total_size),
            downloaded_size,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed_percent.map_or(false, |percent| percent >= 100f32)
    }
}

impl Display for DownloadProgress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.completed_percent {
            Some(percent) => write!(f, "{} = {:.6}", self.file_name, percent),
            None => write!(f, "{} = {} bytes", self.file_name, self.downloaded_size),
        }
    }
}

pub fn completed_percent(downloaded_size: u64, total_size: Option<u64>) -> Option<f32> {
    match total_size {
        None | Some(0) => None,
        Some(total_size) => {
            let percent = downloaded_size as f64 / total_size as f64 * 100f64;
            Some(percent.clamp(0f64, 100f64) as f32)
        }
    }
}

/// Display name of a url: whatever follows the last `/`, or the whole url
/// when that is empty.
pub fn file_name_from_url(url: &str) -> &str {
    match url.rfind('/') {
        Some(index) if index + 1 < url.len() => &url[index + 1..],
        _ => url,
    }
}

#[cfg(test)]
mod test {
    use crate::download_progress::{completed_percent, file_name_from_url, DownloadProgress};

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(file_name_from_url("https://host/files/a.bin"), "a.bin");
        assert_eq!(file_name_from_url("https://host/files/a.bin?x=1"), "a.bin?x=1");
        assert_eq!(file_name_from_url("https://host/files/"), "https://host/files/");
        assert_eq!(file_name_from_url("no-separator"), "no-separator");
    }

    #[test]
    fn test_completed_percent_guards_unknown_size() {
        assert_eq!(completed_percent(100, None), None);
        assert_eq!(completed_percent(100, Some(0)), None);
        assert_eq!(completed_percent(0, Some(200)), Some(0f32));
        assert_eq!(completed_percent(50, Some(200)), Some(25f32));
        assert_eq!(completed_percent(200, Some(200)), Some(100f32));
        assert_eq!(completed_percent(300, Some(200)), Some(100f32));
    }

    #[test]
    fn test_progress_display() {
        let progress = DownloadProgress::new("a.bin", 100, Some(200));
        assert_eq!(progress.to_string(), "a.bin = 50.000000");
        assert!(!progress.is_complete());

        let progress = DownloadProgress::new("a.bin", 4096, None);
        assert_eq!(progress.to_string(), "a.bin = 4096 bytes");

        assert!(DownloadProgress::new("a.bin", 200, Some(200)).is_complete());
    }
}
