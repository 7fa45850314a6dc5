//! Reimbursement submission, review and lookup.

use std::sync::Arc;

use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::models::{ReimbFilter, Reimbursement};
use crate::repository::ReimbursementRepository;
use crate::services::{lookup_value, single_entry, KeyQuery};
use crate::status::ReimbStatus;
use crate::validator::{is_property_of, is_valid_id, is_valid_object, IdCandidate};

/// Fields a caller may leave empty when submitting; the service fills them.
const SUBMIT_EXEMPT: &[&str] = &["id", "submitted", "resolved", "resolver", "receipt", "status"];

const UPDATE_EXEMPT: &[&str] = &["resolved", "resolver", "receipt"];

pub struct ReimbursementService {
    repo: Arc<dyn ReimbursementRepository>,
}

impl ReimbursementService {
    pub fn new(repo: Arc<dyn ReimbursementRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_reimbs(&self) -> CoreResult<Vec<Reimbursement>> {
        let reimbs = self.repo.get_all().await?;
        if reimbs.is_empty() {
            return Err(CoreError::not_found("No reimbursements found"));
        }
        Ok(reimbs)
    }

    pub async fn get_reimb_by_id<I>(&self, id: &I) -> CoreResult<Reimbursement>
    where
        I: IdCandidate + ?Sized + Sync,
    {
        let id = id
            .to_db_id()
            .ok_or_else(|| CoreError::bad_request("Invalid reimbursement id"))?;

        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("No reimbursement found with id {id}")))
    }

    pub async fn get_reimb_by_unique_key(&self, query: &KeyQuery) -> CoreResult<Reimbursement> {
        let (key, value) = single_entry(query)?;
        // Bodies and filters spell the type field `type`.
        let key = if key == "type" { "reimb_type" } else { key };

        if !is_property_of::<Reimbursement>(key) {
            return Err(CoreError::bad_request(format!(
                "'{key}' is not a searchable reimbursement field"
            )));
        }
        if key == "id" {
            return self.get_reimb_by_id(value).await;
        }

        let mut value = lookup_value(value)?;
        if key == "status" {
            let status: ReimbStatus = value.parse().map_err(CoreError::BadRequest)?;
            value = status.as_str();
        }
        self.repo
            .get_by_unique_key(key, value)
            .await?
            .ok_or_else(|| {
                CoreError::not_found(format!("No reimbursement found with {key} {value}"))
            })
    }

    pub async fn get_reimbs_by_author_id<I>(&self, user_id: &I) -> CoreResult<Vec<Reimbursement>>
    where
        I: IdCandidate + ?Sized + Sync,
    {
        let user_id = user_id
            .to_db_id()
            .ok_or_else(|| CoreError::bad_request("Invalid user id"))?;

        let reimbs = self.repo.get_by_author_id(user_id).await?;
        if reimbs.is_empty() {
            return Err(CoreError::not_found(format!(
                "No reimbursements found for user {user_id}"
            )));
        }
        Ok(reimbs)
    }

    /// List reimbursements matching the supplied status and/or type.
    pub async fn filter_reimbs(&self, filter: &ReimbFilter) -> CoreResult<Vec<Reimbursement>> {
        let status = filter
            .status
            .as_deref()
            .map(|s| s.parse::<ReimbStatus>())
            .transpose()
            .map_err(CoreError::BadRequest)?;

        if filter.reimb_type.as_deref().is_some_and(str::is_empty) {
            return Err(CoreError::bad_request("Reimbursement type must not be empty"));
        }

        let reimbs = self.repo.filter(status, filter.reimb_type.clone()).await?;
        if reimbs.is_empty() {
            return Err(CoreError::not_found(
                "No reimbursements match the given filter",
            ));
        }
        Ok(reimbs)
    }

    /// Submit a new reimbursement. It always starts out pending.
    pub async fn add_new_reimb(&self, mut reimb: Reimbursement) -> CoreResult<Reimbursement> {
        if !is_valid_object(&reimb, SUBMIT_EXEMPT) {
            return Err(CoreError::bad_request(
                "Reimbursement is missing required fields",
            ));
        }
        validate_amount(reimb.amount)?;

        reimb.status = ReimbStatus::Pending.as_str().to_string();
        reimb.resolved = None;
        reimb.resolver = None;
        reimb.submitted = Some(Utc::now());

        let saved = self.repo.save(&reimb).await?;
        tracing::info!(
            reimb_id = saved.id,
            author = %saved.author,
            amount = saved.amount,
            "Reimbursement submitted"
        );
        Ok(saved)
    }

    /// Replace a reimbursement, resolving it when the status moves out of
    /// pending.
    pub async fn update_reimb(&self, mut reimb: Reimbursement) -> CoreResult<Reimbursement> {
        if !is_valid_id(&reimb.id) {
            return Err(CoreError::bad_request("Invalid reimbursement id"));
        }
        if !is_valid_object(&reimb, UPDATE_EXEMPT) {
            return Err(CoreError::bad_request(
                "Reimbursement is missing required fields",
            ));
        }
        let next: ReimbStatus = reimb.status.parse().map_err(CoreError::BadRequest)?;
        validate_amount(reimb.amount)?;

        let current = self.repo.get_by_id(reimb.id).await?.ok_or_else(|| {
            CoreError::not_found(format!("No reimbursement found with id {}", reimb.id))
        })?;
        let current_status: ReimbStatus = current.status.parse().map_err(|e: String| {
            tracing::error!(reimb_id = current.id, error = %e, "Stored status is unknown");
            CoreError::Internal("Stored reimbursement status is invalid".into())
        })?;

        if !current_status.can_transition_to(next) {
            return Err(CoreError::ResourcePersistence(format!(
                "Reimbursement {} is already {current_status} and cannot become {next}",
                reimb.id
            )));
        }

        // Authorship and submission time never change.
        reimb.author = current.author;
        reimb.submitted = current.submitted;
        reimb.status = next.as_str().to_string();

        if next.is_resolved() {
            if !reimb.resolver.as_deref().is_some_and(|r| !r.is_empty()) {
                return Err(CoreError::bad_request(
                    "A resolver is required to resolve a reimbursement",
                ));
            }
            reimb.resolved = Some(Utc::now());
        } else {
            reimb.resolved = None;
            reimb.resolver = None;
        }

        if !self.repo.update(&reimb).await? {
            return Err(CoreError::not_found(format!(
                "No reimbursement found with id {}",
                reimb.id
            )));
        }
        tracing::info!(reimb_id = reimb.id, status = %next, "Reimbursement updated");
        Ok(reimb)
    }

    pub async fn delete_by_id<I>(&self, _id: &I) -> CoreResult<bool>
    where
        I: IdCandidate + ?Sized + Sync,
    {
        Err(CoreError::NotImplemented(
            "Deleting reimbursements is not supported".into(),
        ))
    }
}

fn validate_amount(amount: f64) -> CoreResult<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(CoreError::bad_request(
            "Amount must be a positive number",
        ))
    }
}
