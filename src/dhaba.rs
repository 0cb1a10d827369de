//! Highway dhaba query toolkit: filter, sort and projection builders plus a
//! sequential pipeline applier.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A roadside dhaba listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dhaba {
    pub name: String,
    pub rating: f64,
    pub price_for_two: u32,
    pub specialty: String,
}

/// Numeric fields a filter can compare against.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FilterField {
    Rating,
    PriceForTwo,
}

/// Comparison operators for filters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CmpOp {
    Gt,
    Lt,
    Ge,
    Le,
    Eq,
}

/// Build a predicate comparing one field against a threshold. Incomparable
/// values (a NaN rating) never match.
pub fn create_filter(field: FilterField, op: CmpOp, value: f64) -> impl Fn(&Dhaba) -> bool {
    move |dhaba| {
        let field_value = match field {
            FilterField::Rating => dhaba.rating,
            FilterField::PriceForTwo => f64::from(dhaba.price_for_two),
        };

        let ordering = match field_value.partial_cmp(&value) {
            Some(ordering) => ordering,
            None => return false,
        };

        match op {
            CmpOp::Gt => ordering == Ordering::Greater,
            CmpOp::Lt => ordering == Ordering::Less,
            CmpOp::Ge => ordering != Ordering::Less,
            CmpOp::Le => ordering != Ordering::Greater,
            CmpOp::Eq => ordering == Ordering::Equal,
        }
    }
}

/// Fields a sorter can order by, numeric or string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Rating,
    PriceForTwo,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

/// Build a comparator for `sort_by` over listings.
pub fn create_sorter(key: SortKey, order: SortOrder) -> impl Fn(&Dhaba, &Dhaba) -> Ordering {
    move |a, b| {
        let ordering = match key {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Rating => a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal),
            SortKey::PriceForTwo => a.price_for_two.cmp(&b.price_for_two),
        };

        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Fields a projection may carry over.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DhabaField {
    Name,
    Rating,
    PriceForTwo,
    Specialty,
}

/// A listing reduced to a chosen subset of fields; unselected fields are
/// absent, also from the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DhabaView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_for_two: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
}

/// Build a projection keeping only the requested fields.
pub fn create_mapper(fields: Vec<DhabaField>) -> impl Fn(&Dhaba) -> DhabaView {
    move |dhaba| {
        let mut view = DhabaView::default();
        for field in &fields {
            match field {
                DhabaField::Name => view.name = Some(dhaba.name.clone()),
                DhabaField::Rating => view.rating = Some(dhaba.rating),
                DhabaField::PriceForTwo => view.price_for_two = Some(dhaba.price_for_two),
                DhabaField::Specialty => view.specialty = Some(dhaba.specialty.clone()),
            }
        }
        view
    }
}

/// One step of a listing pipeline: takes the whole batch, returns a new one.
pub type PipelineOp = Box<dyn Fn(Vec<Dhaba>) -> Vec<Dhaba>>;

/// Lift a predicate into a pipeline step.
pub fn retaining(pred: impl Fn(&Dhaba) -> bool + 'static) -> PipelineOp {
    Box::new(move |data| data.into_iter().filter(|d| pred(d)).collect())
}

/// Lift a comparator into a pipeline step.
pub fn ordered_by(cmp: impl Fn(&Dhaba, &Dhaba) -> Ordering + 'static) -> PipelineOp {
    Box::new(move |mut data| {
        data.sort_by(|a, b| cmp(a, b));
        data
    })
}

/// Run the batch through each operation in turn, feeding each result into the
/// next step.
pub fn apply_operations(data: Vec<Dhaba>, operations: Vec<PipelineOp>) -> Vec<Dhaba> {
    operations.iter().fold(data, |batch, op| op(batch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, rating: f64, price_for_two: u32) -> Dhaba {
        Dhaba {
            name: name.to_string(),
            rating,
            price_for_two,
            specialty: "dal makhani".to_string(),
        }
    }

    fn sample_listings() -> Vec<Dhaba> {
        vec![
            listing("Punjab Dhaba", 4.5, 400),
            listing("Sher-e-Punjab", 3.2, 250),
            listing("Amrit Dhaba", 4.0, 300),
        ]
    }

    #[test]
    fn filter_compares_the_chosen_field() {
        let high_rated = create_filter(FilterField::Rating, CmpOp::Ge, 4.0);

        let matched: Vec<_> = sample_listings().into_iter().filter(|d| high_rated(d)).collect();
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|d| d.rating >= 4.0));
    }

    #[test]
    fn filter_never_matches_nan() {
        let cheap = create_filter(FilterField::Rating, CmpOp::Le, 5.0);
        assert!(!cheap(&listing("Broken", f64::NAN, 100)));
    }

    #[test]
    fn sorter_orders_both_directions() {
        let mut data = sample_listings();
        data.sort_by(create_sorter(SortKey::Rating, SortOrder::Desc));
        assert_eq!(data[0].name, "Punjab Dhaba");
        assert_eq!(data[2].name, "Sher-e-Punjab");

        data.sort_by(create_sorter(SortKey::Name, SortOrder::Asc));
        assert_eq!(data[0].name, "Amrit Dhaba");
    }

    #[test]
    fn mapper_keeps_only_requested_fields() {
        let names_only = create_mapper(vec![DhabaField::Name]);
        let view = names_only(&listing("Punjab Dhaba", 4.5, 400));

        assert_eq!(view.name.as_deref(), Some("Punjab Dhaba"));
        assert!(view.rating.is_none());
        assert_eq!(
            serde_json::to_string(&view).unwrap(),
            r#"{"name":"Punjab Dhaba"}"#
        );
    }

    #[test]
    fn operations_apply_in_sequence() {
        let result = apply_operations(
            sample_listings(),
            vec![
                retaining(create_filter(FilterField::PriceForTwo, CmpOp::Le, 350.0)),
                ordered_by(create_sorter(SortKey::Rating, SortOrder::Desc)),
            ],
        );

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "Amrit Dhaba");
        assert_eq!(result[1].name, "Sher-e-Punjab");
    }

    #[test]
    fn no_operations_return_the_batch_unchanged() {
        let result = apply_operations(sample_listings(), Vec::new());
        assert_eq!(result.len(), 3);
    }
}
