use chrono::Utc;
use rand::Rng;

/// 将活动名称转为 URL 安全的 slug
/// 小写、去特殊字符、空格转连字符、合并并裁剪连字符
pub fn slugify_event_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = false;
    for c in name.to_lowercase().trim().chars() {
        let mapped = match c {
            'a'..='z' | '0'..='9' => Some(c),
            ' ' | '-' => Some('-'),
            _ => None,
        };
        if let Some(m) = mapped {
            if m == '-' {
                if !last_was_hyphen && !slug.is_empty() {
                    slug.push('-');
                    last_was_hyphen = true;
                }
            } else {
                slug.push(m);
                last_was_hyphen = false;
            }
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// 未提供名称时生成唯一活动名: event-<时间戳base36>-<6位随机base36>
pub fn generate_event_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    let timestamp = to_base36(Utc::now().timestamp_millis() as u64);
    let random: String = (0..6).map(|_| base36_digit(rng.gen_range(0..36))).collect();
    format!("event-{timestamp}-{random}")
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(base36_digit((value % 36) as u32));
        value /= 36;
    }
    digits.iter().rev().collect()
}

fn base36_digit(d: u32) -> char {
    char::from_digit(d, 36).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_slugify_event_name() {
        assert_eq!(slugify_event_name("Office Party 2025"), "office-party-2025");
        assert_eq!(slugify_event_name("  Jule--Gaver!!  "), "jule-gaver");
        assert_eq!(slugify_event_name("X-mas # Draw"), "x-mas-draw");
        assert_eq!(slugify_event_name("---"), "");
        assert_eq!(slugify_event_name("!!!"), "");
    }

    #[test]
    fn test_generate_event_name_format() {
        let mut rng = StdRng::seed_from_u64(3);
        let name = generate_event_name(&mut rng);
        assert!(name.starts_with("event-"));
        let parts: Vec<&str> = name.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 6);
        // 生成的名称本身必须已是合法 slug
        assert_eq!(slugify_event_name(&name), name);
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }
}
