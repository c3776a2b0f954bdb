//! Lightweight CSS property extraction.
//!
//! Parses inline `style=""` attributes and extracts the small set of
//! visual properties the stage painter uses: element dimensions and
//! fill colors.

use egui::Color32;

/// Extracted CSS visual properties.
#[derive(Debug, Clone, Default)]
pub struct StyleProps {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub color: Option<Color32>,
    pub background_color: Option<Color32>,
}

/// Parse an inline `style="..."` attribute value.
pub fn parse_inline_style(style: &str) -> StyleProps {
    let mut props = StyleProps::default();
    for decl in style.split(';') {
        let parts: Vec<&str> = decl.splitn(2, ':').collect();
        if parts.len() != 2 {
            continue;
        }
        let prop = parts[0].trim();
        let val = parts[1].trim();
        match prop {
            "width" => props.width = parse_css_size(val),
            "height" => props.height = parse_css_size(val),
            "color" => props.color = parse_css_color(val),
            "background-color" | "background" => props.background_color = parse_css_color(val),
            _ => {}
        }
    }
    props
}

/// Parse a CSS color value.
pub fn parse_css_color(val: &str) -> Option<Color32> {
    let v = val.trim().to_lowercase();

    // Named colours (the subset the page uses)
    let named = match v.as_str() {
        "black" => Some(Color32::from_rgb(0, 0, 0)),
        "white" => Some(Color32::from_rgb(255, 255, 255)),
        "whitesmoke" => Some(Color32::from_rgb(245, 245, 245)),
        "red" => Some(Color32::from_rgb(255, 0, 0)),
        "blue" => Some(Color32::from_rgb(0, 0, 255)),
        "gold" => Some(Color32::from_rgb(255, 215, 0)),
        "orange" => Some(Color32::from_rgb(255, 165, 0)),
        "gray" | "grey" => Some(Color32::from_rgb(128, 128, 128)),
        "transparent" => Some(Color32::TRANSPARENT),
        _ => None,
    };
    if named.is_some() {
        return named;
    }

    // Hex: #rgb, #rrggbb, #rrggbbaa
    if let Some(hex) = v.strip_prefix('#') {
        // ascii digits only; the byte slices below assume it
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Color32::from_rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color32::from_rgb(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Color32::from_rgba_unmultiplied(r, g, b, a))
            }
            _ => None,
        };
    }

    // rgb(r, g, b) / rgba(r, g, b, a)
    if v.starts_with("rgb") {
        let inner = v
            .trim_start_matches("rgba(")
            .trim_start_matches("rgb(")
            .trim_end_matches(')');
        let nums: Vec<f32> = inner
            .split(',')
            .filter_map(|s| s.trim().parse::<f32>().ok())
            .collect();
        if nums.len() >= 3 {
            let r = nums[0].clamp(0.0, 255.0) as u8;
            let g = nums[1].clamp(0.0, 255.0) as u8;
            let b = nums[2].clamp(0.0, 255.0) as u8;
            let a = if nums.len() >= 4 {
                (nums[3].clamp(0.0, 1.0) * 255.0) as u8
            } else {
                255
            };
            return Some(Color32::from_rgba_unmultiplied(r, g, b, a));
        }
    }

    None
}

/// Parse a CSS size value (px or plain number).
fn parse_css_size(val: &str) -> Option<f32> {
    let v = val.trim().to_lowercase();
    let num_str = v.trim_end_matches("px");
    num_str.trim().parse::<f32>().ok()
}
