use eframe::egui::ColorImage;

/// Module for downloading and decoding video thumbnails for the grid.
pub fn fetch_thumbnail(thumbnail_url: &str) -> Option<ColorImage> {
    // Blocking HTTP GET; failures degrade to the placeholder tile
    let bytes = match reqwest::blocking::get(thumbnail_url).and_then(|resp| resp.bytes()) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::debug!("thumbnail fetch for {} failed: {}", thumbnail_url, err);
            return None;
        }
    };
    // Decode into an image::DynamicImage and convert to RGBA8
    let img = image::load_from_memory(&bytes).ok()?.to_rgba8();
    // Determine the image dimensions for egui
    let size = [img.width() as usize, img.height() as usize];
    // Create a ColorImage from the raw RGBA bytes without premultiplying alpha
    Some(ColorImage::from_rgba_unmultiplied(size, &img))
}
