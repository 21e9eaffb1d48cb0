//! Pure geometry for the composite assets.
//!
//! All functions here are pure and testable without any I/O or images. The
//! backend turns their output into pixels.

use super::params::{SafeZone, Size};

/// Where the logo lands inside a maskable icon canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskablePlacement {
    /// Edge length of the (square) resized logo.
    pub icon_edge: u32,
    pub x: u32,
    pub y: u32,
}

/// Calculate the safe-zone placement of a maskable icon.
///
/// The logo edge is `floor(width * safe_zone)`; it is centered with
/// floor-rounded offsets on both axes.
///
/// # Examples
/// ```
/// # use pwa_assets::imaging::{calculate_maskable_placement, SafeZone, Size};
/// let p = calculate_maskable_placement(Size::square(192), SafeZone(0.7));
/// assert_eq!((p.icon_edge, p.x, p.y), (134, 29, 29));
/// ```
pub fn calculate_maskable_placement(canvas: Size, safe_zone: SafeZone) -> MaskablePlacement {
    let icon_edge = (canvas.width as f64 * safe_zone.value()).floor() as u32;
    MaskablePlacement {
        icon_edge,
        x: canvas.width.saturating_sub(icon_edge) / 2,
        y: canvas.height.saturating_sub(icon_edge) / 2,
    }
}

// =============================================================================
// Dashboard mockup layout
// =============================================================================

pub const HEADER_HEIGHT: u32 = 80;
pub const SIDEBAR_WIDTH: u32 = 250;
pub const CONTENT_PADDING: u32 = 20;
pub const LOGO_EDGE: u32 = 50;
pub const MENU_ITEM_COUNT: u32 = 5;
pub const MENU_ITEM_HEIGHT: u32 = 40;
pub const MENU_ITEM_PITCH: u32 = 50;
pub const TOP_CARD_HEIGHT: u32 = 200;

/// Tailwind slate-50, the page background.
pub const SLATE_50: [u8; 3] = [248, 250, 252];
/// Tailwind slate-100, used for menu items and cards.
pub const SLATE_100: [u8; 3] = [241, 245, 249];
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// One paint step of the mockup, in back-to-front order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Opaque flat-color rectangle.
    Fill { rect: Rect, color: [u8; 3] },
    /// The source logo, resized to the rect and alpha-composited.
    Logo(Rect),
}

/// Compute the dashboard mockup as an ordered list of paint layers.
///
/// Order: background, header, sidebar, content, logo, menu items, top cards,
/// bottom cards. Rectangles that collapse to zero on a small canvas are
/// dropped; anything reaching past the canvas edge is clipped when painted.
pub fn calculate_dashboard_layers(canvas: Size) -> Vec<Layer> {
    let Size { width, height } = canvas;
    let content_width = width.saturating_sub(SIDEBAR_WIDTH);
    let content_height = height.saturating_sub(HEADER_HEIGHT);
    let card_width = content_width.saturating_sub(CONTENT_PADDING * 3) / 2;
    let bottom_card_height =
        height.saturating_sub(HEADER_HEIGHT + CONTENT_PADDING * 3 + TOP_CARD_HEIGHT);

    let fill = |rect: Rect, color: [u8; 3]| Layer::Fill { rect, color };

    let mut layers = vec![
        fill(Rect::new(0, 0, width, height), SLATE_50),
        fill(Rect::new(0, 0, width, HEADER_HEIGHT), WHITE),
        fill(Rect::new(0, HEADER_HEIGHT, SIDEBAR_WIDTH, content_height), WHITE),
        fill(
            Rect::new(SIDEBAR_WIDTH, HEADER_HEIGHT, content_width, content_height),
            WHITE,
        ),
        Layer::Logo(Rect::new(
            CONTENT_PADDING,
            (HEADER_HEIGHT - LOGO_EDGE) / 2,
            LOGO_EDGE,
            LOGO_EDGE,
        )),
    ];

    for i in 0..MENU_ITEM_COUNT {
        layers.push(fill(
            Rect::new(
                CONTENT_PADDING,
                HEADER_HEIGHT + CONTENT_PADDING + i * MENU_ITEM_PITCH,
                SIDEBAR_WIDTH - CONTENT_PADDING * 2,
                MENU_ITEM_HEIGHT,
            ),
            SLATE_100,
        ));
    }

    let card_x = |i: u32| SIDEBAR_WIDTH + CONTENT_PADDING + i * (card_width + CONTENT_PADDING);
    for i in 0..2 {
        layers.push(fill(
            Rect::new(
                card_x(i),
                HEADER_HEIGHT + CONTENT_PADDING,
                card_width,
                TOP_CARD_HEIGHT,
            ),
            SLATE_100,
        ));
    }
    for i in 0..2 {
        layers.push(fill(
            Rect::new(
                card_x(i),
                HEADER_HEIGHT + CONTENT_PADDING * 2 + TOP_CARD_HEIGHT,
                card_width,
                bottom_card_height,
            ),
            SLATE_100,
        ));
    }

    layers.retain(|layer| match layer {
        Layer::Fill { rect, .. } | Layer::Logo(rect) => !rect.is_empty(),
    });
    layers
}
