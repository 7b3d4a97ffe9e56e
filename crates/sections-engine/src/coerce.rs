//! Value coercion
//!
//! Converts a raw JSON value plus its inferred variant into a typed runtime
//! value. Reference-typed settings resolve through the store, one lookup
//! per value, strictly sequential.

use sections_model::{SettingConfig, SettingValue, TypedValue, Variant, value};
use sections_store::{ContentStore, ReferenceKind};
use serde_json::{Map, Value};

/// Coerce one raw value into its variant's runtime type.
///
/// The effective input is `raw` if present and non-null, else `default` if
/// present and non-null, else nothing. Failures never raise: a non-numeric
/// value under [`Variant::Number`] and an unresolvable reference both yield
/// `None`.
pub async fn coerce(
    store: &dyn ContentStore,
    variant: Variant,
    raw: Option<&Value>,
    default: Option<&Value>,
) -> Option<TypedValue> {
    let effective = effective_input(raw, default)?;
    match variant {
        Variant::Number => value::numeric(effective).map(TypedValue::Number),
        Variant::Boolean => Some(TypedValue::Boolean(value::truthy(effective))),
        Variant::Text => Some(TypedValue::Text(effective.clone())),
        Variant::Node | Variant::Asset => resolve_reference(store, variant, effective).await,
    }
}

/// Coerce every declared setting against the raw settings map, in
/// configuration order. Raw keys not declared in configuration are dropped;
/// declared ids missing from the raw map fall back to their default.
pub(crate) async fn coerce_settings(
    store: &dyn ContentStore,
    configs: &[SettingConfig],
    raw: &Map<String, Value>,
) -> Vec<SettingValue> {
    let mut settings = Vec::with_capacity(configs.len());
    for config in configs {
        let variant = Variant::infer(&config.kind);
        let coerced = coerce(store, variant, raw.get(&config.id), config.default.as_ref()).await;
        settings.push(SettingValue {
            id: config.id.clone(),
            variant,
            value: coerced,
        });
    }
    settings
}

fn effective_input<'a>(raw: Option<&'a Value>, default: Option<&'a Value>) -> Option<&'a Value> {
    raw.filter(|v| !v.is_null())
        .or_else(|| default.filter(|v| !v.is_null()))
}

/// Resolve a reference-typed value. A plain string is a store-internal
/// record id; a path-shaped string resolves its trailing segment as an
/// external id against the variant's record family.
async fn resolve_reference(
    store: &dyn ContentStore,
    variant: Variant,
    effective: &Value,
) -> Option<TypedValue> {
    let Some(reference) = effective.as_str() else {
        tracing::debug!(?effective, "Non-string reference value; skipping");
        return None;
    };

    let looked_up = match reference.rsplit_once('/') {
        Some((_, external_id)) => {
            let kind = match variant {
                Variant::Asset => ReferenceKind::Asset,
                _ => ReferenceKind::Entry,
            };
            store.record_by_external_id(kind, external_id).await
        }
        None => store.record_by_id(reference).await,
    };

    let record = match looked_up {
        Ok(Some(record)) => record,
        Ok(None) => {
            tracing::debug!(%reference, "Unresolvable reference");
            return None;
        }
        Err(error) => {
            tracing::warn!(%reference, %error, "Reference lookup failed");
            return None;
        }
    };

    Some(match variant {
        Variant::Asset => TypedValue::Asset(record),
        _ => TypedValue::Node(record),
    })
}
