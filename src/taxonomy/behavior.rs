//! Behavior tag resolution.
//!
//! A behavior is a colon-joined `service:type` tag classifying what a
//! scenario detects. An explicit `labels.behavior` always wins; otherwise
//! the tag is composed from the service (or protocol target, or OS) and
//! the attack type.

use crate::hub::Labels;

/// Resolves the behavior tag for a set of labels.
///
/// Resolution order:
/// 1. explicit `behavior`, returned verbatim;
/// 2. service from `service`, else from the last `target` entry starting
///    with `protocol` (taking the part after the final `.`), else `os`;
/// 3. attack type from `type`, default empty.
///
/// Either half of the composed `service:type` may be empty; the validator
/// treats a fully empty tag as a missing behavior.
#[must_use]
pub fn resolve(labels: &Labels) -> String {
    if let Some(behavior) = &labels.behavior {
        return behavior.clone();
    }

    let mut service = labels.service.clone().unwrap_or_default();

    if service.is_empty() {
        if let Some(targets) = &labels.target {
            for target in targets {
                if target.starts_with("protocol") {
                    service = target.rsplit('.').next().unwrap_or_default().to_string();
                }
            }
        }
    }

    if service.is_empty() {
        if let Some(os) = &labels.os {
            service.clone_from(os);
        }
    }

    let attack_type = labels.attack_type.as_deref().unwrap_or_default();

    format!("{service}:{attack_type}")
}

// ============================================================================
// Tests
// ============================================================================
