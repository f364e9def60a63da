//! Per-page SEO metadata: titles, descriptions, Open Graph / Twitter
//! cards, keyword normalization, and JSON-LD enrichment. Pure data
//! merging; rendering targets a static `<head>` block.

use serde_json::Value;

pub const DEFAULT_OG_IMAGE: &str = "/assets/about/heroImage.png";
pub const DEFAULT_OG_TYPE: &str = "website";
pub const DEFAULT_TWITTER_CARD: &str = "summary_large_image";

/// Keyword input as pages author it: either a pre-split list or a single
/// comma-separated string.
#[derive(Debug, Clone)]
pub enum Keywords {
    List(Vec<String>),
    Csv(String),
}

impl Keywords {
    /// Splits, trims, and drops empties, preserving order.
    fn normalize(&self) -> Vec<String> {
        match self {
            Keywords::List(items) => items
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Keywords::Csv(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

/// Per-page metadata as authored. Everything optional falls back to the
/// site-wide defaults during resolution.
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: Option<String>,
    pub og_type: Option<String>,
    pub og_image: Option<String>,
    pub twitter_card: Option<String>,
    pub noindex: bool,
    pub keywords: Option<Keywords>,
    pub ld_json: Option<Value>,
}

/// Fully merged metadata, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMeta {
    pub full_title: String,
    pub description: String,
    pub canonical: Option<String>,
    pub noindex: bool,
    pub keywords: Option<String>,
    pub og_type: String,
    pub og_image: String,
    pub twitter_card: String,
    pub ld_json: Option<Value>,
}

/// Merges page metadata with site-wide defaults.
///
/// The title is suffixed with `" | {site_name}"` unless it already
/// mentions the site. Keywords are joined into one meta string and also
/// folded into the JSON-LD block, both as `keywords` and as a deduplicated
/// `knowsAbout` union (on the first `@graph` node when the block is a
/// graph, on the root object otherwise).
pub fn resolve(site_name: &str, meta: PageMeta) -> ResolvedMeta {
    let full_title = if meta.title.contains(site_name) {
        meta.title.clone()
    } else {
        format!("{} | {site_name}", meta.title)
    };

    let keyword_list = meta
        .keywords
        .as_ref()
        .map(Keywords::normalize)
        .unwrap_or_default();
    let keywords = if keyword_list.is_empty() {
        None
    } else {
        Some(keyword_list.join(", "))
    };

    let ld_json = meta
        .ld_json
        .map(|value| merge_keywords_into_ld(value, &keyword_list, keywords.as_deref()));

    ResolvedMeta {
        full_title,
        description: meta.description,
        canonical: meta.canonical,
        noindex: meta.noindex,
        keywords,
        og_type: meta.og_type.unwrap_or_else(|| DEFAULT_OG_TYPE.to_string()),
        og_image: meta.og_image.unwrap_or_else(|| DEFAULT_OG_IMAGE.to_string()),
        twitter_card: meta
            .twitter_card
            .unwrap_or_else(|| DEFAULT_TWITTER_CARD.to_string()),
        ld_json,
    }
}

fn merge_keywords_into_ld(mut value: Value, keyword_list: &[String], joined: Option<&str>) -> Value {
    if keyword_list.is_empty() {
        return value;
    }
    let Some(root) = value.as_object_mut() else {
        return value;
    };

    if let Some(joined) = joined {
        root.insert("keywords".to_string(), Value::String(joined.to_string()));
    }

    // Attach knowsAbout to the first @graph node when present, otherwise
    // to the root object.
    let is_graph = root.get("@graph").is_some_and(Value::is_array);
    if is_graph {
        if let Some(first) = root
            .get_mut("@graph")
            .and_then(Value::as_array_mut)
            .and_then(|graph| graph.first_mut())
            .and_then(Value::as_object_mut)
        {
            union_knows_about(first, keyword_list);
        }
    } else {
        union_knows_about(root, keyword_list);
    }

    value
}

/// Unions the keyword list into `knowsAbout`, keeping existing entries
/// first and skipping duplicates.
fn union_knows_about(node: &mut serde_json::Map<String, Value>, keywords: &[String]) {
    let mut merged: Vec<Value> = node
        .get("knowsAbout")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    for keyword in keywords {
        let exists = merged
            .iter()
            .any(|v| v.as_str().is_some_and(|s| s == keyword));
        if !exists {
            merged.push(Value::String(keyword.clone()));
        }
    }

    node.insert("knowsAbout".to_string(), Value::Array(merged));
}

impl ResolvedMeta {
    /// Renders the static head block for this page.
    pub fn render_head(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("<title>{}</title>\n", self.full_title));
        out.push_str(&format!(
            "<meta name=\"description\" content=\"{}\">\n",
            self.description
        ));
        if let Some(canonical) = &self.canonical {
            out.push_str(&format!("<link rel=\"canonical\" href=\"{canonical}\">\n"));
        }
        if self.noindex {
            out.push_str("<meta name=\"robots\" content=\"noindex,nofollow\">\n");
        }
        if let Some(keywords) = &self.keywords {
            out.push_str(&format!("<meta name=\"keywords\" content=\"{keywords}\">\n"));
        }

        out.push_str(&format!(
            "<meta property=\"og:title\" content=\"{}\">\n",
            self.full_title
        ));
        out.push_str(&format!(
            "<meta property=\"og:description\" content=\"{}\">\n",
            self.description
        ));
        if let Some(canonical) = &self.canonical {
            out.push_str(&format!("<meta property=\"og:url\" content=\"{canonical}\">\n"));
        }
        out.push_str(&format!(
            "<meta property=\"og:type\" content=\"{}\">\n",
            self.og_type
        ));
        out.push_str(&format!(
            "<meta property=\"og:image\" content=\"{}\">\n",
            self.og_image
        ));

        out.push_str(&format!(
            "<meta name=\"twitter:card\" content=\"{}\">\n",
            self.twitter_card
        ));
        out.push_str(&format!(
            "<meta name=\"twitter:title\" content=\"{}\">\n",
            self.full_title
        ));
        out.push_str(&format!(
            "<meta name=\"twitter:description\" content=\"{}\">\n",
            self.description
        ));
        out.push_str(&format!(
            "<meta name=\"twitter:image\" content=\"{}\">\n",
            self.og_image
        ));

        if let Some(ld) = &self.ld_json {
            out.push_str(&format!(
                "<script type=\"application/ld+json\">{ld}</script>\n"
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SITE: &str = "Harborview Home Health";

    #[test]
    fn test_title_suffix_applied_once() {
        let resolved = resolve(
            SITE,
            PageMeta {
                title: "CPR Registration".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(resolved.full_title, "CPR Registration | Harborview Home Health");

        // A title already carrying the site name is left alone.
        let resolved = resolve(
            SITE,
            PageMeta {
                title: resolved.full_title.clone(),
                ..Default::default()
            },
        );
        assert_eq!(resolved.full_title, "CPR Registration | Harborview Home Health");
    }

    #[test]
    fn test_keyword_normalization_from_csv() {
        let resolved = resolve(
            SITE,
            PageMeta {
                title: "Services".to_string(),
                keywords: Some(Keywords::Csv("home health, , CPR classes ,".to_string())),
                ..Default::default()
            },
        );
        assert_eq!(resolved.keywords.as_deref(), Some("home health, CPR classes"));
    }

    #[test]
    fn test_ld_json_root_merge_dedupes_knows_about() {
        let resolved = resolve(
            SITE,
            PageMeta {
                title: "About".to_string(),
                keywords: Some(Keywords::List(vec![
                    "home health".to_string(),
                    "CPR classes".to_string(),
                ])),
                ld_json: Some(json!({
                    "@type": "LocalBusiness",
                    "knowsAbout": ["home health"],
                })),
                ..Default::default()
            },
        );

        let ld = resolved.ld_json.unwrap();
        assert_eq!(ld["keywords"], "home health, CPR classes");
        assert_eq!(ld["knowsAbout"], json!(["home health", "CPR classes"]));
    }

    #[test]
    fn test_ld_json_graph_merge_targets_first_node() {
        let resolved = resolve(
            SITE,
            PageMeta {
                title: "Home".to_string(),
                keywords: Some(Keywords::List(vec!["AED training".to_string()])),
                ld_json: Some(json!({
                    "@graph": [
                        { "@type": "Organization" },
                        { "@type": "WebSite" }
                    ],
                })),
                ..Default::default()
            },
        );

        let ld = resolved.ld_json.unwrap();
        assert_eq!(ld["@graph"][0]["knowsAbout"], json!(["AED training"]));
        assert!(ld["@graph"][1].get("knowsAbout").is_none());
    }

    #[test]
    fn test_no_keywords_leaves_ld_untouched() {
        let original = json!({ "@type": "Organization" });
        let resolved = resolve(
            SITE,
            PageMeta {
                title: "Contact".to_string(),
                ld_json: Some(original.clone()),
                ..Default::default()
            },
        );
        assert_eq!(resolved.ld_json, Some(original));
        assert!(resolved.keywords.is_none());
    }

    #[test]
    fn test_render_head_includes_defaults_and_robots() {
        let resolved = resolve(
            SITE,
            PageMeta {
                title: "Patient Portal".to_string(),
                description: "Secure portal access.".to_string(),
                canonical: Some("https://example.com/portal".to_string()),
                noindex: true,
                ..Default::default()
            },
        );
        let head = resolved.render_head();

        assert!(head.contains("<meta name=\"robots\" content=\"noindex,nofollow\">"));
        assert!(head.contains("og:type\" content=\"website\""));
        assert!(head.contains("twitter:card\" content=\"summary_large_image\""));
        assert!(head.contains("href=\"https://example.com/portal\""));
    }
}
