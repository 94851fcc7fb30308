use std::sync::Arc;

use async_trait::async_trait;

use super::UseCaseResult;
use crate::context::RequestContext;
use crate::db::ContactRepository;
use crate::models::Contact;

/// Contact operations exposed to the delivery layer
#[async_trait]
pub trait ContactUseCase: Send + Sync {
    async fn create_contact(&self, ctx: &RequestContext, contact: &Contact) -> UseCaseResult<()>;
    async fn read_contact(&self, ctx: &RequestContext, id: i64) -> UseCaseResult<Contact>;
    async fn update_contact(&self, ctx: &RequestContext, contact: &Contact) -> UseCaseResult<()>;
    async fn delete_contact(&self, ctx: &RequestContext, id: i64) -> UseCaseResult<()>;
}

pub struct ContactInteractor {
    repo: Arc<dyn ContactRepository>,
}

impl ContactInteractor {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ContactUseCase for ContactInteractor {
    #[tracing::instrument(name = "usecase.create_contact", skip_all, fields(correlation_id = %ctx))]
    async fn create_contact(&self, ctx: &RequestContext, contact: &Contact) -> UseCaseResult<()> {
        self.repo.create(ctx, contact).await.map_err(|e| {
            tracing::error!(error = %e, "Error creating contact");
            e.into()
        })
    }

    #[tracing::instrument(name = "usecase.read_contact", skip_all, fields(correlation_id = %ctx))]
    async fn read_contact(&self, ctx: &RequestContext, id: i64) -> UseCaseResult<Contact> {
        self.repo.read(ctx, id).await.map_err(|e| {
            tracing::error!(error = %e, id, "Error reading contact");
            e.into()
        })
    }

    #[tracing::instrument(name = "usecase.update_contact", skip_all, fields(correlation_id = %ctx))]
    async fn update_contact(&self, ctx: &RequestContext, contact: &Contact) -> UseCaseResult<()> {
        self.repo.update(ctx, contact).await.map_err(|e| {
            tracing::error!(error = %e, "Error updating contact");
            e.into()
        })
    }

    #[tracing::instrument(name = "usecase.delete_contact", skip_all, fields(correlation_id = %ctx))]
    async fn delete_contact(&self, ctx: &RequestContext, id: i64) -> UseCaseResult<()> {
        self.repo.delete(ctx, id).await.map_err(|e| {
            tracing::error!(error = %e, id, "Error deleting contact");
            e.into()
        })
    }
}
