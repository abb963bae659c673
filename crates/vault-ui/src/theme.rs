//! VaultAI palette and the frames shared by the panels.

use egui::{Color32, CornerRadius, Frame, Margin, Stroke, Vec2};
use vault_types::message::Sender;

pub const BG_PRIMARY: Color32 = Color32::from_rgb(15, 17, 26);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(28, 31, 46);
pub const BG_SURFACE: Color32 = Color32::from_rgb(41, 45, 66);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(232, 234, 246);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(148, 152, 180);
pub const ACCENT: Color32 = Color32::from_rgb(124, 92, 255);
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(64, 52, 130);
pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
pub const ERROR_BG: Color32 = Color32::from_rgb(60, 22, 28);
pub const BORDER: Color32 = Color32::from_rgb(54, 58, 84);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
/// Chat bubbles keep a sharp corner on the sender's side
const USER_BUBBLE_ROUNDING: CornerRadius = CornerRadius { nw: 12, ne: 12, sw: 12, se: 2 };
const AGENT_BUBBLE_ROUNDING: CornerRadius = CornerRadius { nw: 12, ne: 12, sw: 2, se: 12 };
const PANEL_MARGIN: Margin = Margin::symmetric(12, 10);

pub const SIDEBAR_WIDTH: f32 = 300.0;
pub const SIDEBAR_COLLAPSED_WIDTH: f32 = 56.0;
/// Bubbles never take more than this share of the transcript width
pub const BUBBLE_MAX_WIDTH_RATIO: f32 = 0.8;

/// Dark VaultAI visuals: flat panels, bordered inputs, accent selection.
pub fn apply_theme(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        let visuals = &mut style.visuals;
        visuals.dark_mode = true;
        visuals.panel_fill = BG_PRIMARY;
        visuals.window_fill = BG_SECONDARY;
        visuals.window_stroke = Stroke::new(1.0, BORDER);
        visuals.window_corner_radius = CornerRadius::same(12);
        visuals.menu_corner_radius = PANEL_ROUNDING;
        // Text edits and combo popups
        visuals.extreme_bg_color = BG_SURFACE;
        visuals.faint_bg_color = BG_SECONDARY;
        visuals.hyperlink_color = ACCENT;

        let widgets = &mut visuals.widgets;
        widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER);
        widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
        for state in [&mut widgets.inactive, &mut widgets.hovered, &mut widgets.active] {
            state.corner_radius = PANEL_ROUNDING;
        }
        widgets.inactive.weak_bg_fill = BG_SURFACE;
        widgets.inactive.bg_fill = BG_SURFACE;
        widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
        widgets.hovered.weak_bg_fill = ACCENT_SOFT;
        widgets.hovered.bg_fill = ACCENT_SOFT;
        widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
        widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
        widgets.active.weak_bg_fill = ACCENT;
        widgets.active.bg_fill = ACCENT;
        widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

        visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
        visuals.selection.stroke = Stroke::new(1.0, ACCENT);

        style.spacing.item_spacing = Vec2::new(8.0, 6.0);
        style.spacing.button_padding = Vec2::new(10.0, 5.0);
    });
}

/// Section card: login box, input and output sections, transcript.
pub fn card_frame() -> Frame {
    Frame::new()
        .fill(BG_SECONDARY)
        .stroke(Stroke::new(1.0, BORDER))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_MARGIN)
}

pub fn bubble_frame(sender: Sender) -> Frame {
    let (fill, rounding) = match sender {
        Sender::User => (ACCENT_SOFT, USER_BUBBLE_ROUNDING),
        Sender::Agent => (BG_SURFACE, AGENT_BUBBLE_ROUNDING),
    };
    Frame::new().fill(fill).corner_radius(rounding).inner_margin(Margin::same(8))
}

/// One entry in the recent-chats list
pub fn chat_row_frame(selected: bool) -> Frame {
    let (fill, stroke) = if selected {
        (BG_SURFACE, Stroke::new(1.0, ACCENT))
    } else {
        (BG_PRIMARY, Stroke::NONE)
    };
    Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(Margin::same(8))
}

/// Translated text under a section
pub fn translation_frame() -> Frame {
    Frame::new()
        .fill(BG_SURFACE)
        .stroke(Stroke::new(1.0, ACCENT_SOFT))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(Margin::same(8))
}

/// Toast background and title colour for a notice
pub fn toast_frame(is_error: bool) -> (Frame, Color32) {
    let (fill, title) = if is_error {
        (ERROR_BG, ERROR)
    } else {
        (BG_SURFACE, SUCCESS)
    };
    let frame = Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, title.linear_multiply(0.5)))
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_MARGIN);
    (frame, title)
}
