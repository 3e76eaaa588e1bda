use async_trait::async_trait;

use crate::protocol::{TransformRequest, TransformResponse};

#[async_trait]
pub trait Transform: Send + Sync {
    async fn apply(&self, req: TransformRequest) -> TransformResponse;

    fn name(&self) -> &'static str;
}
