use clap::{Args, Subcommand};

use crate::cli::op::{Op, OpContext};
use jsonstash_daemon::http_server::api::buckets::{
    CreateRequest, DeleteRequest, GetRequest, ListRequest,
};
use jsonstash_daemon::http_server::api::client::ApiError;

crate::command_enum! {
    (List, ListRequest),
    (Create, CreateRequest),
    (Delete, DeleteRequest),
    (Get, GetRequest),
}

// Rename the generated Command to BucketCommand for clarity
pub type BucketCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Bucket {
    #[command(subcommand)]
    pub command: BucketCommand,
}

#[async_trait::async_trait]
impl Op for Bucket {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[async_trait::async_trait]
impl Op for ListRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let names = ctx.client.call(self.clone()).await?;
        if names.is_empty() {
            Ok("No buckets found".to_string())
        } else {
            Ok(names.join("\n"))
        }
    }
}

#[async_trait::async_trait]
impl Op for CreateRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(ctx.client.call(self.clone()).await?.to_string())
    }
}

#[async_trait::async_trait]
impl Op for DeleteRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(ctx.client.call(self.clone()).await?.to_string())
    }
}

#[async_trait::async_trait]
impl Op for GetRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let values = ctx.client.call(self.clone()).await?;
        Ok(values.join("\n"))
    }
}
