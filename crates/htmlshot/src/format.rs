//! Text rendering of devices and the preset registry.

use crate::emulation::{DeviceInfo, DeviceRegistry, RegistryEntry};

/// Fixed-column summary: id, name, `WIDTHxHEIGHT`, scale.
///
/// ```text
/// 66  iPhone 8                                  375x667     2.00x
/// ```
#[must_use]
pub fn one_line(entry: &RegistryEntry) -> String {
    let info = entry.info();
    format!(
        "{:>2}  {:<40}  {:<10}  {:.2}x",
        entry.id(),
        info.name,
        info.dimensions(),
        info.scale
    )
}

/// One labelled line per field, no trailing newline.
#[must_use]
pub fn multiline(info: &DeviceInfo) -> String {
    [
        format!("Name: {}", info.name),
        format!("User-Agent: {}", info.user_agent),
        format!("Width: {}", info.width),
        format!("Height: {}", info.height),
        format!("Scale: {}", scale_text(info.scale)),
        format!("Landscape: {}", info.landscape),
        format!("Mobile: {}", info.mobile),
        format!("Touch: {}", info.touch),
    ]
    .join("\n")
}

// Shortest decimal; infinities carry an explicit sign.
fn scale_text(scale: f64) -> String {
    if scale.is_infinite() {
        let sign = if scale.is_sign_positive() { '+' } else { '-' };
        format!("{sign}Inf")
    } else {
        scale.to_string()
    }
}

/// [`multiline`] with `indent` spaces before every line.
#[must_use]
pub fn multiline_indented(info: &DeviceInfo, indent: usize) -> String {
    let pad = " ".repeat(indent);
    multiline(info)
        .split('\n')
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every preset as [`one_line`], one per line, in registry order.
#[must_use]
pub fn registry_listing(registry: &DeviceRegistry) -> String {
    registry
        .list_all()
        .iter()
        .map(one_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn iphone_8() -> DeviceInfo {
        DeviceInfo::new("iPhone 8")
            .with_user_agent("Mozilla/5.0 (iPhone)")
            .with_viewport_size(375, 667)
            .with_scale(2.0)
            .with_mobile(true)
            .with_touch(true)
    }

    mod one_line_tests {
        use super::*;

        #[test]
        fn test_columns() {
            let registry = DeviceRegistry::from_devices([iphone_8()]);
            let line = one_line(&registry.list_all()[0]);
            assert_eq!(
                line,
                format!(" 1  {:<40}  {:<10}  2.00x", "iPhone 8", "375x667")
            );
        }

        #[test]
        fn test_two_digit_id_and_fraction() {
            let registry = DeviceRegistry::from_devices(
                (0..12).map(|i| DeviceInfo::new(format!("D{i}")).with_scale(2.625)),
            );
            let line = one_line(&registry.list_all()[11]);
            assert!(line.starts_with("12  D11 "));
            assert!(line.ends_with("  2.62x") || line.ends_with("  2.63x"));
        }

        #[test]
        fn test_long_name_not_truncated() {
            let name = "N".repeat(45);
            let registry = DeviceRegistry::from_devices([DeviceInfo::new(name.clone())]);
            assert!(one_line(&registry.list_all()[0]).contains(&name));
        }
    }

    mod multiline_tests {
        use super::*;

        #[test]
        fn test_fields_in_order() {
            let text = multiline(&iphone_8());
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(
                lines,
                vec![
                    "Name: iPhone 8",
                    "User-Agent: Mozilla/5.0 (iPhone)",
                    "Width: 375",
                    "Height: 667",
                    "Scale: 2",
                    "Landscape: false",
                    "Mobile: true",
                    "Touch: true",
                ]
            );
            assert!(!text.ends_with('\n'));
        }

        #[test]
        fn test_scale_minimal_digits() {
            let text = multiline(&iphone_8().with_scale(2.625));
            assert!(text.contains("Scale: 2.625\n"));
            let text = multiline(&iphone_8().with_scale(0.0));
            assert!(text.contains("Scale: 0\n"));
        }

        #[test]
        fn test_scale_non_finite() {
            let text = multiline(&iphone_8().with_scale(f64::INFINITY));
            assert!(text.contains("Scale: +Inf\n"));
            let text = multiline(&iphone_8().with_scale(f64::NEG_INFINITY));
            assert!(text.contains("Scale: -Inf\n"));
            let text = multiline(&iphone_8().with_scale(f64::NAN));
            assert!(text.contains("Scale: NaN\n"));
        }

        #[test]
        fn test_indented_matches_plain() {
            let info = iphone_8();
            let plain = multiline(&info);
            let indented = multiline_indented(&info, 4);
            assert_eq!(plain.lines().count(), indented.lines().count());
            for (p, i) in plain.lines().zip(indented.lines()) {
                assert_eq!(i, format!("    {p}"));
            }
        }

        #[test]
        fn test_zero_indent_is_plain() {
            let info = iphone_8();
            assert_eq!(multiline_indented(&info, 0), multiline(&info));
        }

        #[test]
        fn test_empty_fields_still_get_lines() {
            let indented = multiline_indented(&DeviceInfo::default(), 2);
            assert_eq!(indented.lines().count(), 8);
            assert!(indented.starts_with("  Name: "));
        }
    }

    mod listing_tests {
        use super::*;

        #[test]
        fn test_one_line_per_preset() {
            let registry = DeviceRegistry::builtin();
            let listing = registry_listing(registry);
            let lines: Vec<&str> = listing.lines().collect();
            assert_eq!(lines.len(), registry.len());
            for (line, entry) in lines.iter().zip(registry.list_all()) {
                assert_eq!(*line, one_line(entry));
            }
        }

        #[test]
        fn test_empty_registry() {
            assert_eq!(registry_listing(&DeviceRegistry::default()), "");
        }
    }
}
