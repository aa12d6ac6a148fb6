// authprov-core/src/runtime/engine.rs
// ============================================================================
// Module: AuthProv Rule Engine
// Description: Per-change dispatch and batch verdict aggregation.
// Purpose: Validate a change batch against a related-resource snapshot.
// Dependencies: crate::core, crate::runtime::{rules, mutations}
// ============================================================================

//! ## Overview
//! The engine classifies each change path once, dispatches on
//! `(PathShape, Operation)`, and folds per-change verdicts into the batch
//! verdict: acceptance is the AND, status is the MAX. Every change is
//! evaluated even after earlier failures so the caller receives the full
//! error list.
//!
//! Security posture: the request is borrowed immutably and each call owns
//! its accumulator, so concurrent calls share no state.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::Change;
use crate::core::Operation;
use crate::core::PathShape;
use crate::core::RelatedResources;
use crate::core::ResourceLookupError;
use crate::core::ResponseAssembler;
use crate::core::StatusCode;
use crate::core::ValidationReport;
use crate::core::ValidationRequest;
use crate::core::Verdict;
use crate::core::messages;
use crate::core::path;
use crate::runtime::mutations::compute_mutations;
use crate::runtime::rules;

// ============================================================================
// SECTION: Rule Engine
// ============================================================================

/// Stateless validator for auth-subscription change batches.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    /// Creates a rule engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates every change of `request` and returns the batch report.
    ///
    /// Input errors recorded while decoding the request are reported first
    /// and reject the batch with 409.
    #[must_use]
    pub fn validate(&self, request: &ValidationRequest) -> ValidationReport {
        let mut out = ResponseAssembler::new();
        let mut verdict = Verdict::accepted();

        if !request.input_errors.is_empty() {
            for error in &request.input_errors {
                out.push_error(error.clone());
            }
            verdict = verdict.combine(Verdict::rejected(StatusCode::Conflict));
        }

        for change in &request.changes {
            verdict = verdict.combine(self.validate_change(change, &request.related, &mut out));
        }

        out.finish(verdict)
    }

    /// Validates one change and records its outcome.
    pub fn validate_change(
        &self,
        change: &Change,
        related: &RelatedResources,
        out: &mut ResponseAssembler,
    ) -> Verdict {
        let resource_path = change.resource_path.as_str();
        match path::classify(resource_path) {
            PathShape::Collection => match change.operation {
                Operation::Delete => {
                    out.accept(change.clone());
                    Verdict::accepted()
                }
                Operation::Create | Operation::Update => {
                    out.unprocessable(resource_path, messages::unsupported_resource_path());
                    Verdict::rejected(StatusCode::UnprocessableEntity)
                }
            },
            PathShape::StaticData | PathShape::PrivId => {
                if !path::has_imsi_priv_id(resource_path) {
                    out.constraint_violation(resource_path, messages::invalid_imsi_in_path());
                    return Verdict::rejected(StatusCode::Conflict);
                }
                let verdict = match change.operation {
                    Operation::Create => self.validate_create(change, related, out),
                    Operation::Update => self.validate_update(change, related, out),
                    Operation::Delete => Verdict::accepted(),
                };
                if verdict.accepted {
                    out.accept(compute_mutations(change, related));
                }
                verdict
            }
            PathShape::Legacy | PathShape::Unmatched => {
                if path::is_dynamic_data_path(resource_path) {
                    out.constraint_violation(resource_path, messages::dynamic_data_forbidden());
                    Verdict::rejected(StatusCode::Conflict)
                } else if change.operation == Operation::Delete {
                    out.accept(change.clone());
                    Verdict::accepted()
                } else {
                    out.unprocessable(resource_path, messages::unsupported_resource_path());
                    Verdict::rejected(StatusCode::UnprocessableEntity)
                }
            }
        }
    }

    /// CREATE: common rules, then legacy consistency.
    #[must_use]
    pub fn validate_create(
        &self,
        change: &Change,
        related: &RelatedResources,
        out: &mut ResponseAssembler,
    ) -> Verdict {
        let common = rules::check_common(change, related, out);
        if !common.accepted {
            return common.combine(Verdict::rejected(StatusCode::Conflict));
        }
        let legacy = rules::check_legacy(change, related, out);
        if !legacy.accepted {
            return legacy.combine(Verdict::rejected(StatusCode::Conflict));
        }
        Verdict::accepted()
    }

    /// UPDATE: stored resource lookup, common rules, then immutability.
    #[must_use]
    pub fn validate_update(
        &self,
        change: &Change,
        related: &RelatedResources,
        out: &mut ResponseAssembler,
    ) -> Verdict {
        let resource_path = change.resource_path.as_str();
        let base = path::base_path(resource_path);
        let stored = match related.auth_subscription(base) {
            Ok(stored) => stored,
            Err(ResourceLookupError::NotFound {
                ..
            }) => {
                out.unprocessable(resource_path, messages::missing_related_resource(base));
                return Verdict::rejected(StatusCode::UnprocessableEntity);
            }
            Err(err @ ResourceLookupError::WrongVariant {
                ..
            }) => {
                out.unprocessable(
                    resource_path,
                    messages::unexpected_related_resource(&err.to_string()),
                );
                return Verdict::rejected(StatusCode::UnprocessableEntity);
            }
        };

        let common = rules::check_common(change, related, out);
        if !common.accepted {
            return common.combine(Verdict::rejected(StatusCode::Conflict));
        }
        let immutable = rules::check_immutable(change, stored, out);
        if !immutable.accepted {
            return immutable;
        }
        Verdict::accepted()
    }
}
