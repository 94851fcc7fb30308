use std::sync::Arc;

use async_trait::async_trait;

use super::UseCaseResult;
use crate::context::RequestContext;
use crate::db::GroupRepository;
use crate::models::Group;

/// Group operations exposed to the delivery layer
#[async_trait]
pub trait GroupUseCase: Send + Sync {
    async fn create_group(&self, ctx: &RequestContext, group: &Group) -> UseCaseResult<()>;
    async fn read_group(&self, ctx: &RequestContext, id: i64) -> UseCaseResult<Group>;
    async fn add_contact_to_group(
        &self,
        ctx: &RequestContext,
        contact_id: i64,
        group_id: i64,
    ) -> UseCaseResult<()>;
}

pub struct GroupInteractor {
    repo: Arc<dyn GroupRepository>,
}

impl GroupInteractor {
    pub fn new(repo: Arc<dyn GroupRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl GroupUseCase for GroupInteractor {
    #[tracing::instrument(name = "usecase.create_group", skip_all, fields(correlation_id = %ctx))]
    async fn create_group(&self, ctx: &RequestContext, group: &Group) -> UseCaseResult<()> {
        self.repo.create(ctx, group).await.map_err(|e| {
            tracing::error!(error = %e, "Error creating group");
            e.into()
        })
    }

    #[tracing::instrument(name = "usecase.read_group", skip_all, fields(correlation_id = %ctx))]
    async fn read_group(&self, ctx: &RequestContext, id: i64) -> UseCaseResult<Group> {
        self.repo.read(ctx, id).await.map_err(|e| {
            tracing::error!(error = %e, id, "Error reading group");
            e.into()
        })
    }

    #[tracing::instrument(name = "usecase.add_contact_to_group", skip_all, fields(correlation_id = %ctx))]
    async fn add_contact_to_group(
        &self,
        ctx: &RequestContext,
        contact_id: i64,
        group_id: i64,
    ) -> UseCaseResult<()> {
        self.repo
            .add_contact(ctx, contact_id, group_id)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, contact_id, group_id, "Error adding contact to group");
                e.into()
            })
    }
}
