use std::future::Future;

use crate::{entities::validation::MAX_SLUG_LENGTH, errors::AppError};

/// Upper bound on `-N` suffixes tried before giving up on a derived slug.
pub const MAX_SLUG_ATTEMPTS: usize = 100;

/// Canonical slug for `title`, cut to `max_len` characters.
///
/// Returns `None` when the title has nothing slug-worthy left (e.g. only punctuation).
pub fn slugify_title(title: &str, max_len: usize) -> Option<String> {
    let slug = truncate_slug(&slug::slugify(title), max_len);
    if slug.is_empty() { None } else { Some(slug) }
}

/// `base`, then `base-2`, `base-3`, ... each kept within `max_len`.
pub fn slug_candidates(base: &str, max_len: usize) -> impl Iterator<Item = String> + '_ {
    std::iter::once(truncate_slug(base, max_len)).chain((2u32..).map(move |n| {
        let suffix = format!("-{n}");
        let stem = truncate_slug(base, max_len.saturating_sub(suffix.len()));
        format!("{stem}{suffix}")
    }))
}

/// `Conflict` when `taken` resolves to true for `slug`.
pub async fn ensure_slug_free<Fut>(slug: &str, kind: &str, taken: Fut) -> Result<(), AppError>
where
    Fut: Future<Output = Result<bool, AppError>>,
{
    if taken.await? {
        return Err(AppError::Conflict(format!("{kind} slug '{slug}' already exists")));
    }
    Ok(())
}

/// Slug for a new record: `explicit` if it is free, otherwise the title's slug
/// with the first free `-N` suffix. `exists` reports whether a slug is taken.
pub async fn resolve_new_slug<F, Fut>(
    explicit: Option<&str>,
    title: &str,
    kind: &str,
    exists: F,
) -> Result<String, AppError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<bool, AppError>>,
{
    if let Some(explicit) = explicit {
        ensure_slug_free(explicit, kind, exists(explicit.to_string())).await?;
        return Ok(explicit.to_string());
    }

    let base = slugify_title(title, MAX_SLUG_LENGTH as usize).ok_or_else(|| {
        AppError::invalid_field("slug", "Title does not produce a usable slug; please provide one")
    })?;

    for candidate in slug_candidates(&base, MAX_SLUG_LENGTH as usize).take(MAX_SLUG_ATTEMPTS) {
        if !exists(candidate.clone()).await? {
            return Ok(candidate);
        }
    }

    Err(AppError::Conflict(format!("No free slug found for '{}'", base)))
}

fn truncate_slug(slug: &str, max_len: usize) -> String {
    // slugify output is ASCII, so byte indices are char boundaries
    let cut = if slug.len() > max_len { &slug[..max_len] } else { slug };
    cut.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn taken(slugs: &[&str]) -> HashSet<String> {
        slugs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn titles_are_lowercased_and_hyphenated() {
        assert_eq!(slugify_title("AI Research Lab", 50).as_deref(), Some("ai-research-lab"));
        assert_eq!(slugify_title("AI Research Lab!!!", 50).as_deref(), Some("ai-research-lab"));
        assert_eq!(slugify_title("  Graph -- Theory & Networks ", 50).as_deref(), Some("graph-theory-networks"));
    }

    #[test]
    fn punctuation_only_titles_have_no_slug() {
        assert_eq!(slugify_title("!!!", 50), None);
        assert_eq!(slugify_title("", 50), None);
    }

    #[test]
    fn long_titles_are_cut_without_trailing_hyphen() {
        let slug = slugify_title("abcd efgh ijkl", 5).unwrap();
        assert_eq!(slug, "abcd");
    }

    #[test]
    fn candidates_append_numeric_suffixes() {
        let got: Vec<String> = slug_candidates("ai-research-lab", 50).take(3).collect();
        assert_eq!(got, vec!["ai-research-lab", "ai-research-lab-2", "ai-research-lab-3"]);
    }

    #[test]
    fn suffixed_candidates_respect_max_len() {
        let base = "a".repeat(50);
        let second = slug_candidates(&base, 50).nth(1).unwrap();
        assert_eq!(second.len(), 50);
        assert!(second.ends_with("-2"));
    }

    #[actix_rt::test]
    async fn derived_slug_skips_taken_candidates() {
        let existing = taken(&["ai-research-lab", "ai-research-lab-2"]);
        let slug = resolve_new_slug(None, "AI Research Lab!!!", "Project", |s| {
            let hit = existing.contains(&s);
            async move { Ok(hit) }
        })
        .await
        .unwrap();
        assert_eq!(slug, "ai-research-lab-3");
    }

    #[actix_rt::test]
    async fn explicit_slug_is_kept_or_rejected() {
        let existing = taken(&["taken"]);
        let exists = |s: String| {
            let hit = existing.contains(&s);
            async move { Ok(hit) }
        };

        let free = resolve_new_slug(Some("fresh"), "Ignored", "Blog post", exists).await.unwrap();
        assert_eq!(free, "fresh");

        match resolve_new_slug(Some("taken"), "Ignored", "Blog post", exists).await {
            Err(AppError::Conflict(msg)) => assert_eq!(msg, "Blog post slug 'taken' already exists"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[actix_rt::test]
    async fn unsluggable_title_is_a_slug_field_error() {
        let result = resolve_new_slug(None, "!!!", "Project", |_| async { Ok(false) }).await;
        match result {
            Err(AppError::ValidationError(fields)) => assert_eq!(fields[0].field, "slug"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[actix_rt::test]
    async fn lookup_errors_propagate() {
        let result = resolve_new_slug(None, "Graph Theory", "Project", |_| async {
            Err(AppError::InternalError("pool closed".into()))
        })
        .await;
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }
}
