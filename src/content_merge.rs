//! Load-time merge of persisted content with the built-in defaults.
//!
//! One generic routine walks every [`Section`] and applies that section's
//! [`MergeRule`] to the persisted JSON. Adding a section to the document only
//! requires giving it a rule in [`merge_rule`]; there is no per-field
//! fallback code to forget.

use log::{debug, warn};
use serde_json::{Map, Value as JsonValue};

use crate::app_response::AppResponse;
use crate::content_model::{ContentDocument, Section};

/// How a persisted section value is combined with its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeRule {
    /// Persisted value if present and not null, otherwise the default.
    OrDefault,
    /// Persisted value only if it is a non-empty list. An empty persisted
    /// list means "use defaults", not "intentionally empty".
    NonEmptyList,
    /// Default object with every non-null persisted field laid over it.
    Overlay,
}

pub fn merge_rule(section: Section) -> MergeRule {
    match section {
        Section::Hero => MergeRule::Overlay,
        Section::BannerSlider => MergeRule::NonEmptyList,
        _ => MergeRule::OrDefault,
    }
}

/// Where a section of the merged document came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionSource {
    Persisted,
    /// Overlay of persisted fields on the default.
    Merged,
    Default,
    /// Persisted value was present but could not be decoded; default used.
    Rejected(AppResponse),
}

#[derive(Debug, Clone)]
pub struct MergeReport {
    pub document: ContentDocument,
    pub sources: Vec<(Section, SectionSource)>,
}

impl MergeReport {
    /// Sections whose persisted value failed to decode, with the error.
    pub fn rejected(&self) -> impl Iterator<Item = (Section, &AppResponse)> {
        self.sources.iter().filter_map(|(section, source)| match source {
            SectionSource::Rejected(err) => Some((*section, err)),
            _ => None,
        })
    }
}

/// Applies the per-section rules to `persisted`, starting from `defaults`.
///
/// A persisted root that is not a JSON object contributes nothing. Fields
/// missing inside a section decode as empty values. A section holding a
/// value of the wrong type falls back to its default and is reported as
/// [`SectionSource::Rejected`].
pub fn merge_with_defaults(persisted: &JsonValue, defaults: &ContentDocument) -> MergeReport {
    let mut document = defaults.clone();
    let mut sources = Vec::with_capacity(Section::ALL.len());

    let Some(root) = persisted.as_object() else {
        warn!("Persisted content is not a JSON object; using defaults");
        let sources = Section::ALL
            .into_iter()
            .map(|section| (section, SectionSource::Default))
            .collect();
        return MergeReport { document, sources };
    };

    for section in Section::ALL {
        let candidate = match pick_value(section, root, defaults) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!("Could not read default for section '{}': {}", section, err);
                sources.push((section, SectionSource::Default));
                continue;
            }
        };

        let source = match candidate {
            None => SectionSource::Default,
            Some((value, source)) => match document.replace_section_value(section, value) {
                Ok(()) => source,
                Err(err) => {
                    warn!("Persisted section '{}' has an unexpected shape: {}", section, err);
                    SectionSource::Rejected(err)
                }
            },
        };
        debug!("Section '{}' loaded from {:?}", section, source);
        sources.push((section, source));
    }

    MergeReport { document, sources }
}

/// Chooses the value a section should be decoded from, or `None` to keep
/// the default untouched.
fn pick_value(
    section: Section,
    root: &Map<String, JsonValue>,
    defaults: &ContentDocument,
) -> Result<Option<(JsonValue, SectionSource)>, AppResponse> {
    let persisted = root.get(section.key()).filter(|value| !value.is_null());

    let picked = match (merge_rule(section), persisted) {
        (_, None) => None,
        (MergeRule::OrDefault, Some(value)) => Some((value.clone(), SectionSource::Persisted)),
        (MergeRule::NonEmptyList, Some(value)) => match value.as_array() {
            Some(items) if items.is_empty() => None,
            _ => Some((value.clone(), SectionSource::Persisted)),
        },
        (MergeRule::Overlay, Some(value)) => match value.as_object() {
            Some(fields) => {
                let mut base = defaults.section_value(section)?;
                overlay(&mut base, fields);
                Some((base, SectionSource::Merged))
            }
            None => Some((value.clone(), SectionSource::Persisted)),
        },
    };
    Ok(picked)
}

fn overlay(base: &mut JsonValue, fields: &Map<String, JsonValue>) {
    if let Some(target) = base.as_object_mut() {
        for (key, value) in fields {
            if !value.is_null() {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_defaults::default_document;
    use serde_json::json;

    fn source_of(report: &MergeReport, section: Section) -> Option<&SectionSource> {
        report
            .sources
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, source)| source)
    }

    #[test]
    fn empty_object_yields_defaults() {
        let defaults = default_document();
        let report = merge_with_defaults(&json!({}), &defaults);
        assert_eq!(report.document, defaults);
        assert!(report.sources.iter().all(|(_, source)| *source == SectionSource::Default));
    }

    #[test]
    fn non_object_root_yields_defaults() {
        let defaults = default_document();
        let report = merge_with_defaults(&json!([1, 2, 3]), &defaults);
        assert_eq!(report.document, defaults);
        assert_eq!(report.sources.len(), Section::ALL.len());
    }

    #[test]
    fn present_section_replaces_default() {
        let defaults = default_document();
        let sidebar = json!({
            "phone": "1",
            "fax": "2",
            "email": "a@b.c",
            "hours": []
        });
        let report = merge_with_defaults(&json!({ "rightSidebar": sidebar }), &defaults);
        assert_eq!(report.document.right_sidebar.phone, "1");
        assert!(report.document.right_sidebar.hours.is_empty());
        assert_eq!(source_of(&report, Section::RightSidebar), Some(&SectionSource::Persisted));
        assert_eq!(report.document.contact, defaults.contact);
    }

    #[test]
    fn empty_banner_list_falls_back() {
        let defaults = default_document();
        let report = merge_with_defaults(&json!({ "bannerSlider": [] }), &defaults);
        assert_eq!(report.document.banner_slider, defaults.banner_slider);
        assert_eq!(source_of(&report, Section::BannerSlider), Some(&SectionSource::Default));
    }

    #[test]
    fn hero_overlays_fields_and_keeps_default_categories() {
        let defaults = default_document();
        let report = merge_with_defaults(
            &json!({ "hero": { "title": "Custom", "selectedCategories": null } }),
            &defaults,
        );
        let hero = &report.document.hero;
        assert_eq!(hero.title, "Custom");
        assert_eq!(hero.subtitle, defaults.hero.subtitle);
        assert_eq!(hero.selected_categories, defaults.hero.selected_categories);
        assert_eq!(source_of(&report, Section::Hero), Some(&SectionSource::Merged));
    }

    #[test]
    fn malformed_section_is_rejected_to_default() {
        let defaults = default_document();
        let report = merge_with_defaults(&json!({ "contact": { "title": 42 } }), &defaults);
        assert_eq!(report.document.contact, defaults.contact);
        let rejected: Vec<_> = report.rejected().map(|(section, _)| section).collect();
        assert_eq!(rejected, vec![Section::Contact]);
    }
}
