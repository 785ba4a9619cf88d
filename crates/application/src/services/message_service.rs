//! 私信用例服务
//!
//! 追加式会话存储：发送与按会话对查询，消息不可修改、不可删除。

use std::sync::Arc;

use domain::{Message, MessageContent, MessageId, MessageRepository, UserId};
use uuid::Uuid;

use crate::{clock::Clock, dto::MessageDto, error::ApplicationError};

#[derive(Debug, Clone)]
pub struct SendMessageRequest {
    pub recipient_id: Uuid,
    pub content: String,
}

pub struct MessageServiceDependencies {
    pub message_repository: Arc<dyn MessageRepository>,
    pub clock: Arc<dyn Clock>,
}

pub struct MessageService {
    deps: MessageServiceDependencies,
}

impl MessageService {
    pub fn new(deps: MessageServiceDependencies) -> Self {
        Self { deps }
    }

    /// 发送私信；时间戳由服务端时钟指定。
    /// 收件人是否存在不做校验（与现网行为一致）。
    pub async fn send_message(
        &self,
        request: SendMessageRequest,
        sender: Uuid,
    ) -> Result<MessageDto, ApplicationError> {
        let content = MessageContent::new(request.content)?;

        let message = Message::send(
            MessageId::from(Uuid::new_v4()),
            UserId::from(sender),
            UserId::from(request.recipient_id),
            content,
            self.deps.clock.now(),
        );

        let stored = self.deps.message_repository.create(message).await?;
        Ok(MessageDto::from(&stored))
    }

    /// 会话查询：两个身份之间全部消息，按创建时间升序。
    /// 对会话双方对称；调用方不限于会话参与者（与现网行为一致）。
    pub async fn get_conversation(
        &self,
        user_id: Uuid,
        other_user_id: Uuid,
    ) -> Result<Vec<MessageDto>, ApplicationError> {
        let messages = self
            .deps
            .message_repository
            .list_conversation(UserId::from(user_id), UserId::from(other_user_id))
            .await?;
        Ok(messages.iter().map(MessageDto::from).collect())
    }
}
