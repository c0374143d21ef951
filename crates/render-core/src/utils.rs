use vitae_layout::FontFace;

/// Resource name under which a face is registered in the page resources.
pub fn font_resource_name(face: FontFace) -> String {
    let index = FontFace::ALL.iter().position(|f| *f == face).unwrap_or(0);
    format!("F{}", index + 1)
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_resources_follow_face_order() {
        assert_eq!(font_resource_name(FontFace::Helvetica), "F1");
        assert_eq!(font_resource_name(FontFace::HelveticaBold), "F2");
        assert_eq!(font_resource_name(FontFace::HelveticaBoldOblique), "F4");
    }

    #[test]
    fn flips_top_down_coordinates() {
        assert_eq!(flip_y(54.0, 792.0), 738.0);
        assert_eq!(flip_y(0.0, 792.0), 792.0);
    }
}
