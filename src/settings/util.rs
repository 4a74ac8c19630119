use ratatui::style::Color;

/// Parse a colour value accepted in configuration files and CLI flags.
///
/// Supports named ANSI colours (`cyan`, `light-blue`), 256-colour indexes
/// (`208`) and hex codes (`#rgb` or `#rrggbb`).
pub(super) fn parse_color(input: &str) -> Option<Color> {
	let value = input.trim();

	if let Some(hex) = value.strip_prefix('#') {
		return parse_hex_color(hex);
	}

	if let Ok(index) = value.parse::<u8>() {
		return Some(Color::Indexed(index));
	}

	match normalize_key(value).as_str() {
		"reset" | "none" | "default" => Some(Color::Reset),
		"black" => Some(Color::Black),
		"red" => Some(Color::Red),
		"green" => Some(Color::Green),
		"yellow" => Some(Color::Yellow),
		"blue" => Some(Color::Blue),
		"magenta" => Some(Color::Magenta),
		"cyan" => Some(Color::Cyan),
		"gray" | "grey" => Some(Color::Gray),
		"dark_gray" | "dark_grey" => Some(Color::DarkGray),
		"light_red" => Some(Color::LightRed),
		"light_green" => Some(Color::LightGreen),
		"light_yellow" => Some(Color::LightYellow),
		"light_blue" => Some(Color::LightBlue),
		"light_magenta" => Some(Color::LightMagenta),
		"light_cyan" => Some(Color::LightCyan),
		"white" => Some(Color::White),
		_ => None,
	}
}

fn parse_hex_color(hex: &str) -> Option<Color> {
	if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
		return None;
	}

	let expanded = match hex.len() {
		3 => hex.chars().flat_map(|ch| [ch, ch]).collect::<String>(),
		6 => hex.to_string(),
		_ => return None,
	};

	let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
	let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
	let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;

	Some(Color::Rgb(r, g, b))
}

fn normalize_key(value: &str) -> String {
	value
		.to_ascii_lowercase()
		.chars()
		.map(|ch| match ch {
			'-' | ' ' => '_',
			other => other,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn named_colors_ignore_case_and_separators() {
		assert_eq!(parse_color("Light-Blue"), Some(Color::LightBlue));
		assert_eq!(parse_color(" dark gray "), Some(Color::DarkGray));
		assert_eq!(parse_color("GREY"), Some(Color::Gray));
	}

	#[test]
	fn hex_codes_expand_shorthand() {
		assert_eq!(parse_color("#fff"), Some(Color::Rgb(255, 255, 255)));
		assert_eq!(parse_color("#1e293b"), Some(Color::Rgb(30, 41, 59)));
	}

	#[test]
	fn indexed_colors_parse_from_bare_numbers() {
		assert_eq!(parse_color("208"), Some(Color::Indexed(208)));
	}

	#[test]
	fn garbage_is_rejected() {
		assert_eq!(parse_color("not-a-color"), None);
		assert_eq!(parse_color("#12345"), None);
		assert_eq!(parse_color("#zzz"), None);
		assert_eq!(parse_color(""), None);
	}
}
