//! Visual theming for the diagram.
//!
//! Provides the zone color scheme and turns node tones into inline CSS.

use super::layout::Tone;
use super::types::Zone;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors of one zone panel and the nodes inside it.
#[derive(Clone, Debug)]
pub struct ZoneStyle {
	/// Base hue of the zone (cards, headings, rings).
	pub accent: Color,
	/// Panel background.
	pub panel: Color,
	pub border: Color,
}

impl ZoneStyle {
	fn from_accent(accent: Color) -> Self {
		Self {
			accent,
			panel: accent.lighten(0.93),
			border: accent.lighten(0.7),
		}
	}

	pub fn heading(&self) -> Color {
		self.accent.darken(0.45)
	}

	/// Background of a selected node.
	pub fn active_fill(&self) -> Color {
		self.accent.lighten(0.8)
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub surface: Color,
	pub border: Color,
	pub text: Color,
	pub muted: Color,
	pub neutral_tile: Color,
	pub saas: ZoneStyle,
	pub customer: ZoneStyle,
	pub managed: ZoneStyle,
	pub teal: Color,
	pub redis: Color,
	pub postgres: Color,
}

impl Theme {
	/// Light theme matching the walkthrough deck colors (default)
	pub fn default_theme() -> Self {
		Self {
			surface: Color::rgb(255, 255, 255),
			border: Color::rgb(229, 231, 235),
			text: Color::rgb(31, 41, 55),
			muted: Color::rgb(75, 85, 99),
			neutral_tile: Color::rgb(243, 244, 246),
			saas: ZoneStyle::from_accent(Color::rgb(59, 130, 246)),
			customer: ZoneStyle::from_accent(Color::rgb(34, 197, 94)),
			managed: ZoneStyle::from_accent(Color::rgb(168, 85, 247)),
			teal: Color::rgb(20, 184, 166),
			redis: Color::rgb(220, 38, 38),
			postgres: Color::rgb(37, 99, 235),
		}
	}

	pub fn zone(&self, zone: Zone) -> &ZoneStyle {
		match zone {
			Zone::Saas => &self.saas,
			Zone::Customer => &self.customer,
			Zone::Managed => &self.managed,
		}
	}

	/// Inline style of a zone panel.
	pub fn panel_css(&self, zone: Zone) -> String {
		let style = self.zone(zone);
		format!(
			"background: {}; border: 1px solid {};",
			style.panel.to_css(),
			style.border.to_css()
		)
	}

	/// Fill, text color and ring of a node in the given tone.
	pub fn node_css(&self, zone: Zone, tone: Tone, active: bool) -> String {
		let style = self.zone(zone);
		if active {
			return format!(
				"background: {}; color: {}; box-shadow: 0 0 0 2px {};",
				style.active_fill().to_css(),
				style.heading().to_css(),
				style.accent.lighten(0.3).to_css()
			);
		}
		let (fill, text) = match tone {
			Tone::Neutral | Tone::Redis => (self.neutral_tile, self.text),
			Tone::Primary => (style.accent, self.surface),
			Tone::Strong => (style.accent.darken(0.15), self.surface),
			Tone::Teal => (self.teal, self.surface),
		};
		format!("background: {}; color: {};", fill.to_css(), text.to_css())
	}

	/// Chip nested inside a filled card.
	pub fn chip_css(&self, zone: Zone, active: bool) -> String {
		let style = self.zone(zone);
		if active {
			format!(
				"background: {}; color: {};",
				self.surface.to_css(),
				style.heading().to_css()
			)
		} else {
			format!(
				"background: {}; color: {};",
				style.accent.lighten(0.25).with_alpha(0.8).to_css(),
				self.surface.to_css()
			)
		}
	}

	/// The dashed tunnel band between the SaaS and customer panels.
	pub fn tunnel_css(&self, active: bool) -> String {
		if active {
			format!(
				"border: 1px dashed {}; background: {};",
				self.saas.accent.to_css(),
				self.saas.panel.to_css()
			)
		} else {
			format!("border: 1px dashed {};", self.muted.lighten(0.4).to_css())
		}
	}

	/// Icon color of a tile.
	pub fn icon_color(&self, zone: Zone, tone: Tone, active: bool) -> Color {
		match tone {
			Tone::Redis => self.redis,
			Tone::Neutral => self.zone(zone).accent.darken(0.2),
			_ if active => self.zone(zone).accent.darken(0.2),
			_ => self.surface,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::default_theme()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(59, 130, 246).to_css(), "#3b82f6");
		assert_eq!(Color::rgb(0, 0, 0).with_alpha(0.5).to_css(), "rgba(0, 0, 0, 0.5)");
	}

	#[test]
	fn lighten_and_darken_hit_the_extremes() {
		let c = Color::rgb(100, 150, 200);
		assert_eq!(c.lighten(1.0), Color::rgb(255, 255, 255));
		assert_eq!(c.darken(1.0), Color::rgb(0, 0, 0));
		assert_eq!(c.lighten(0.0), c);
	}

	#[test]
	fn active_nodes_get_a_ring() {
		let theme = Theme::default();
		assert!(theme.node_css(Zone::Saas, Tone::Primary, true).contains("box-shadow"));
		assert!(!theme.node_css(Zone::Saas, Tone::Primary, false).contains("box-shadow"));
	}

	#[test]
	fn redis_icons_stay_red() {
		let theme = Theme::default();
		assert_eq!(theme.icon_color(Zone::Managed, Tone::Redis, false), theme.redis);
		assert_eq!(theme.icon_color(Zone::Saas, Tone::Redis, true), theme.redis);
	}
}
