use std::future::Future;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use crate::errors::ServiceError;
use models::service;

/// Prefix of the generated token used when a title yields no
/// convertible characters at all.
pub const FALLBACK_PREFIX: &str = "service";

/// Numeric suffixes are probed up to this bound; past it the probe
/// switches to a random suffix so many same-titled services cannot
/// degrade into a long linear scan.
const MAX_SUFFIX_PROBES: u32 = 50;

/// Fixed Cyrillic transliteration alphabet. Soft and hard signs are
/// dropped; everything else maps to its conventional Latin digraph.
fn translit(c: char) -> Option<&'static str> {
    let mapped = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "yo",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };
    Some(mapped)
}

/// Lowercase, transliterate, and collapse everything else into single
/// hyphens. May return an empty string when nothing is convertible.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if let Some(t) = translit(c) {
            out.push_str(t);
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

fn random_token() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

/// Probe `base`, then `base-2`, `base-3`, … until `taken` reports a
/// free candidate. Bounded: after `MAX_SUFFIX_PROBES` attempts a
/// random suffix is used instead (the database unique constraint
/// remains the backstop for the rare race).
pub async fn probe_unique<F, Fut>(base: &str, mut taken: F) -> Result<String, ServiceError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, ServiceError>>,
{
    let mut candidate = base.to_string();
    let mut suffix = 1u32;
    loop {
        if !taken(candidate.clone()).await? {
            return Ok(candidate);
        }
        suffix += 1;
        if suffix > MAX_SUFFIX_PROBES {
            return Ok(format!("{}-{}", base, random_token()));
        }
        candidate = format!("{}-{}", base, suffix);
    }
}

/// Derive a slug from `title` that no other service currently uses.
/// `exclude` skips the record's own row when re-saving.
pub async fn unique_slug<C>(
    conn: &C,
    title: &str,
    exclude: Option<Uuid>,
) -> Result<String, ServiceError>
where
    C: ConnectionTrait,
{
    let mut base = slugify(title);
    if base.is_empty() {
        base = format!("{}-{}", FALLBACK_PREFIX, random_token());
    }
    probe_unique(&base, |candidate| async move {
        let mut query = service::Entity::find().filter(service::Column::Slug.eq(candidate));
        if let Some(id) = exclude {
            query = query.filter(service::Column::Id.ne(id));
        }
        let hits = query
            .count(conn)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(hits > 0)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn transliterates_russian_title() {
        assert_eq!(slugify("Генеральная уборка"), "generalnaya-uborka");
    }

    #[test]
    fn keeps_latin_and_digits() {
        assert_eq!(slugify("Уборка офисов 24/7"), "uborka-ofisov-24-7");
        assert_eq!(slugify("Deep Clean PRO"), "deep-clean-pro");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("  Мойка — окон!!  "), "moyka-okon");
    }

    #[test]
    fn digraphs_and_signs() {
        assert_eq!(slugify("Жёсткая щётка"), "zhyostkaya-schyotka");
        assert_eq!(slugify("Подъезд"), "podezd");
    }

    #[test]
    fn unconvertible_title_is_empty() {
        assert_eq!(slugify("***"), "");
        assert_eq!(slugify(""), "");
    }

    #[tokio::test]
    async fn probe_returns_base_when_free() {
        let got = probe_unique("uborka", |_| async { Ok(false) }).await.unwrap();
        assert_eq!(got, "uborka");
    }

    #[tokio::test]
    async fn probe_starts_numbering_at_two() {
        let taken: HashSet<String> =
            ["generalnaya-uborka".to_string()].into_iter().collect();
        let got = probe_unique("generalnaya-uborka", |c| {
            let taken = taken.clone();
            async move { Ok(taken.contains(&c)) }
        })
        .await
        .unwrap();
        assert_eq!(got, "generalnaya-uborka-2");
    }

    #[tokio::test]
    async fn probe_skips_to_next_free_suffix() {
        let taken: HashSet<String> = ["uborka", "uborka-2", "uborka-3"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let got = probe_unique("uborka", |c| {
            let taken = taken.clone();
            async move { Ok(taken.contains(&c)) }
        })
        .await
        .unwrap();
        assert_eq!(got, "uborka-4");
    }

    #[tokio::test]
    async fn probe_falls_back_to_random_suffix_when_capped() {
        let got = probe_unique("uborka", |_| async { Ok(true) }).await.unwrap();
        let suffix = got.strip_prefix("uborka-").expect("random suffix appended");
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn fallback_token_shape() {
        let token = format!("{}-{}", FALLBACK_PREFIX, random_token());
        assert!(token.starts_with("service-"));
        assert_eq!(token.len(), "service-".len() + 8);
    }
}
