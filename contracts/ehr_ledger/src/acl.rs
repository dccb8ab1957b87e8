//! ACL template configuration and permission degradation.

use soroban_sdk::{Env, Map, String};

use crate::types::DataKey;
use crate::ContractError;

/// Resource categories every record starts with unless the admin installs a
/// different template.
const DEFAULT_CATEGORIES: [(&str, u32); 5] = [
    ("resource1", 1),
    ("resource2", 2),
    ("resource3", 3),
    ("resource4", 4),
    ("resource5", 5),
];

pub fn default_template(env: &Env) -> Map<String, u32> {
    let mut template = Map::new(env);
    for (category, level) in DEFAULT_CATEGORIES {
        template.set(String::from_str(env, category), level);
    }
    template
}

pub fn load_template(env: &Env) -> Result<Map<String, u32>, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::AclTemplate)
        .ok_or(ContractError::NotInitialized)
}

pub fn store_template(env: &Env, template: &Map<String, u32>) {
    env.storage()
        .instance()
        .set(&DataKey::AclTemplate, template);
    ehr_common::extend_instance_ttl(env);
}

/// Lowers `category` by `degree` in place and returns `(old, new)` levels.
///
/// The level must stay strictly positive; on any error `acl` is untouched.
pub fn degrade(
    acl: &mut Map<String, u32>,
    category: &String,
    degree: u32,
) -> Result<(u32, u32), ContractError> {
    if degree == 0 {
        return Err(ContractError::InvalidArgument);
    }
    let level = acl
        .get(category.clone())
        .ok_or(ContractError::ResourceNotFound)?;
    let new_level = match level.checked_sub(degree) {
        Some(l) if l > 0 => l,
        _ => return Err(ContractError::OutOfRange),
    };
    acl.set(category.clone(), new_level);
    Ok((level, new_level))
}
