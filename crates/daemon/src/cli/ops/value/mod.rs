use clap::{Args, Subcommand};

use crate::cli::op::{Op, OpContext};
use jsonstash_daemon::http_server::api::buckets::AddRequest;
use jsonstash_daemon::http_server::api::client::ApiError;
use jsonstash_daemon::http_server::api::values::{
    DeleteValueRequest, GetValueRequest, UpdateRequest,
};

crate::command_enum! {
    (Add, AddRequest),
    (Get, GetValueRequest),
    (Update, UpdateRequest),
    (Delete, DeleteValueRequest),
}

pub type ValueCommand = Command;

#[derive(Args, Debug, Clone)]
pub struct Value {
    #[command(subcommand)]
    pub command: ValueCommand,
}

#[async_trait::async_trait]
impl Op for Value {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[async_trait::async_trait]
impl Op for AddRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(ctx.client.call(self.clone()).await?.to_string())
    }
}

#[async_trait::async_trait]
impl Op for GetValueRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        ctx.client.call(self.clone()).await
    }
}

#[async_trait::async_trait]
impl Op for UpdateRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(ctx.client.call(self.clone()).await?.to_string())
    }
}

#[async_trait::async_trait]
impl Op for DeleteValueRequest {
    type Error = ApiError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(ctx.client.call(self.clone()).await?.to_string())
    }
}
