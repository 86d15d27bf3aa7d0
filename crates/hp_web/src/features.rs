use hp_core::{Error, FeatureVector, Result};
use crate::state::FieldOrder;

fn parse_value(field: &str, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| Error::Parse {
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Build a feature vector from submitted `(name, value)` pairs.
pub fn extract(fields: &[(String, String)], order: &FieldOrder) -> Result<FeatureVector> {
    let values = match order {
        FieldOrder::Submission => fields
            .iter()
            .map(|(name, value)| parse_value(name, value))
            .collect::<Result<Vec<_>>>()?,
        FieldOrder::Named(names) => names
            .iter()
            .map(|name| {
                let value = fields
                    .iter()
                    .find(|(field, _)| field == name)
                    .map(|(_, value)| value.as_str())
                    .ok_or_else(|| Error::MissingField(name.clone()))?;
                parse_value(name, value)
            })
            .collect::<Result<Vec<_>>>()?,
    };
    Ok(FeatureVector::new(values))
}
