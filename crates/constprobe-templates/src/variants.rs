//! Cross-product expansion of templates into concrete variants

use itertools::{Either, Itertools};
use tracing::debug;

use crate::{
    error::Result,
    family::{CandidateTable, PlaceholderFamily},
    parser::{ParsedTemplate, TemplateParser},
};

/// A placeholder together with the values it will take
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Placeholder name as written in the template
    pub name: String,
    /// Family resolved from the name
    pub family: PlaceholderFamily,
    /// Values substituted for this placeholder, in order
    pub candidates: Vec<String>,
}

/// One fully substituted template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Position of the source template in the catalog
    pub template_index: usize,
    /// Chosen value for each placeholder, in placeholder order
    pub bindings: Vec<(String, String)>,
    /// Rendered source text
    pub source: String,
}

/// A validated template, ready to enumerate its variants
#[derive(Debug, Clone)]
pub struct TemplatePlan {
    index: usize,
    template: ParsedTemplate,
    slots: Vec<Slot>,
}

impl TemplatePlan {
    /// Position of the template in the catalog
    pub fn index(&self) -> usize {
        self.index
    }

    /// Placeholders of the template, in first-occurrence order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of variants: product of every slot's candidate count
    pub fn variant_count(&self) -> usize {
        self.slots.iter().map(|slot| slot.candidates.len()).product()
    }

    /// Enumerate the variants lazily
    ///
    /// Follows cartesian product order: the last placeholder varies fastest.
    pub fn variants(&self) -> impl Iterator<Item = Variant> + '_ {
        let combinations = if self.slots.is_empty() {
            Either::Left(std::iter::once(Vec::new()))
        } else {
            Either::Right(
                self.slots
                    .iter()
                    .map(|slot| slot.candidates.iter())
                    .multi_cartesian_product(),
            )
        };

        combinations.map(move |values| self.render(&values))
    }

    fn render(&self, values: &[&String]) -> Variant {
        let source = self.template.substitute(|name| {
            self.slots
                .iter()
                .zip(values)
                .find(|(slot, _)| slot.name == name)
                .map(|(_, value)| value.as_str())
                .unwrap_or_default()
        });

        let bindings = self
            .slots
            .iter()
            .zip(values)
            .map(|(slot, value)| (slot.name.clone(), (*value).clone()))
            .collect();

        Variant {
            template_index: self.index,
            bindings,
            source,
        }
    }
}

/// Expands templates using a candidate table
#[derive(Debug, Clone, Default)]
pub struct VariantGenerator {
    table: CandidateTable,
}

impl VariantGenerator {
    /// Create a generator over the given candidate table
    pub fn new(table: CandidateTable) -> Self {
        Self { table }
    }

    /// Candidate table in use
    pub fn table(&self) -> &CandidateTable {
        &self.table
    }

    /// Validate a whole catalog into plans
    ///
    /// Every template is parsed and every placeholder classified before
    /// anything is returned, so a bad catalog fails as a unit.
    pub fn plan<S: AsRef<str>>(&self, catalog: &[S]) -> Result<Vec<TemplatePlan>> {
        catalog
            .iter()
            .enumerate()
            .map(|(index, template)| self.plan_template(index, template.as_ref()))
            .collect()
    }

    /// Validate a single template
    pub fn plan_template(&self, index: usize, template: &str) -> Result<TemplatePlan> {
        let parsed = TemplateParser::parse(template)?;

        let slots = parsed
            .placeholder_names
            .iter()
            .map(|name| {
                let family = PlaceholderFamily::classify(name)?;
                Ok(Slot {
                    name: name.clone(),
                    family,
                    candidates: self.table.candidates(family).to_vec(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let plan = TemplatePlan {
            index,
            template: parsed,
            slots,
        };

        debug!(
            template = index,
            placeholders = plan.slots.len(),
            variants = plan.variant_count(),
            "Planned template"
        );

        Ok(plan)
    }

    /// Expand a whole catalog into its variants, in order
    pub fn generate<S: AsRef<str>>(&self, catalog: &[S]) -> Result<Vec<Variant>> {
        let plans = self.plan(catalog)?;
        Ok(plans.iter().flat_map(|plan| plan.variants()).collect())
    }
}
