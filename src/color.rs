use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::category::Category;

const SATURATION: f32 = 0.75;
const LIGHTNESS: f32 = 0.55;

/// Colour at `hue` degrees with the chart saturation and lightness.
fn hue_color(hue: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, SATURATION, LIGHTNESS).into_color();
    let rgb: Srgb<u8> = rgb.into_format();
    Color32::from_rgb(rgb.red, rgb.green, rgb.blue)
}

// ---------------------------------------------------------------------------
// Category → Color32
// ---------------------------------------------------------------------------

/// Fixed colour per category, so a category keeps its colour in every chart
/// regardless of which other categories are filtered in.
///
/// Topical categories get evenly spaced hues in precedence order; `Other`
/// is grey.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    colors: [Color32; Category::ALL.len()],
}

impl Default for CategoryColors {
    fn default() -> Self {
        let hues = (Category::ALL.len() - 1) as f32;
        let colors = Category::ALL.map(|category| match category {
            Category::Other => Color32::GRAY,
            topical => hue_color(category_rank(topical) as f32 / hues * 360.0),
        });
        CategoryColors { colors }
    }
}

fn category_rank(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|&c| c == category)
        .unwrap_or(Category::ALL.len() - 1)
}

impl CategoryColors {
    /// Colour for `category`; `Other` is always grey.
    pub fn color_for(&self, category: Category) -> Color32 {
        self.colors[category_rank(category)]
    }
}
