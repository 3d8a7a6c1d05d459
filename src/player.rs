/// Embedded-player URL for a video id, autoplay enabled
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}?autoplay=1", video_id)
}

/// Open a URL with the platform handler on a detached thread
pub fn open_in_browser(url: &str) {
    let url = url.to_owned();
    std::thread::spawn(move || {
        #[cfg(target_os = "windows")]
        {
            let _ = std::process::Command::new("explorer").arg(&url).spawn();
        }
        #[cfg(target_os = "macos")]
        {
            let _ = std::process::Command::new("open").arg(&url).spawn();
        }
        #[cfg(all(unix, not(target_os = "macos")))]
        {
            let _ = std::process::Command::new("xdg-open").arg(&url).spawn();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_enables_autoplay() {
        assert_eq!(
            embed_url("EfK0SURQ8X0"),
            "https://www.youtube.com/embed/EfK0SURQ8X0?autoplay=1"
        );
    }
}
