//! Marker styling: status colors, category glyphs, pulse treatment.

use crate::popup;
use maraudes::data::{ActionStatus, OutreachAction};
use merchants::data::{Merchant, MerchantCategory};
use shared_kernel::geo::GeoPoint;

/// All merchant pins share the partner green.
pub const MERCHANT_PIN_COLOR: &str = "#10b981";

pub fn status_color(status: ActionStatus) -> &'static str {
    match status {
        ActionStatus::Planned => "#3b82f6",
        ActionStatus::InProgress => "#f59e0b",
        ActionStatus::Completed => "#10b981",
        ActionStatus::Cancelled => "#ef4444",
    }
}

/// SVG path drawn inside the merchant pin.
pub fn category_glyph(category: MerchantCategory) -> &'static str {
    match category {
        MerchantCategory::Restaurant => {
            "M8 22h8v-9l4.159-6.238A1 1 0 0019.414 5H4.586a1 1 0 00-.745 1.762L8 13v9z"
        }
        MerchantCategory::Cafe => {
            "M5 11h14v2a6 6 0 01-6 6H7a6 6 0 01-6-6v-2zm1-4V2h12v5M8 7v4m4-4v4m4-4v4"
        }
        MerchantCategory::Bakery => "M6 2l3 6 3-6 3 6 3-6v18a2 2 0 01-2 2H8a2 2 0 01-2-2V2z",
        MerchantCategory::Pharmacy => "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16l7-3 7 3z",
        MerchantCategory::Supermarket => {
            "M7 4V2a1 1 0 011-1h8a1 1 0 011 1v2h4a1 1 0 011 1v3H2V5a1 1 0 011-1h4zM6 9v10a2 2 0 002 2h8a2 2 0 002-2V9H6z"
        }
        MerchantCategory::HealthCenter => {
            "M12 2l8 4v10.5c0 5.99-4.99 10.5-8 10.5s-8-4.51-8-10.5V6l8-4z"
        }
        MerchantCategory::Laundromat => "M4 6h16v2H4V6zm0 5h16v6a2 2 0 01-2 2H6a2 2 0 01-2-2v-6z",
        MerchantCategory::ClothingStore => {
            "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z"
        }
        MerchantCategory::Other => "M19 21V5a2 2 0 00-2-2H7a2 2 0 00-2 2v16l7-3 7 3z",
    }
}

/// A maraude pin ready for the widget: position, status color, whether it
/// pulses, and its popup HTML.
#[derive(Clone, Debug, PartialEq)]
pub struct MaraudeMarker {
    pub position: GeoPoint,
    pub color: &'static str,
    pub pulse: bool,
    pub popup_html: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MerchantMarker {
    pub position: GeoPoint,
    pub color: &'static str,
    pub glyph: &'static str,
    pub popup_html: String,
}

/// The pulse treatment marks actions that are under way or happening
/// today.
pub fn maraude_marker(action: &OutreachAction) -> MaraudeMarker {
    MaraudeMarker {
        position: action.start_point(),
        color: status_color(action.status),
        pulse: action.status == ActionStatus::InProgress || action.happening_today(),
        popup_html: popup::maraude_popup(action),
    }
}

pub fn merchant_marker(merchant: &Merchant) -> MerchantMarker {
    MerchantMarker {
        position: merchant.point(),
        color: MERCHANT_PIN_COLOR,
        glyph: category_glyph(merchant.category),
        popup_html: popup::merchant_popup(merchant),
    }
}
