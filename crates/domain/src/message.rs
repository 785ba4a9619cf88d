use crate::value_objects::{MessageContent, MessageId, Timestamp, UserId};

/// 一条有方向的私信
///
/// 创建后不可修改、不可删除；时间戳由服务端时钟指定。
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub content: MessageContent,
    pub created_at: Timestamp,
}

impl Message {
    pub fn send(
        id: MessageId,
        sender_id: UserId,
        recipient_id: UserId,
        content: MessageContent,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            sender_id,
            recipient_id,
            content,
            created_at: now,
        }
    }

    /// 判断该消息是否属于给定的会话对（与方向无关）
    pub fn belongs_to_conversation(&self, a: UserId, b: UserId) -> bool {
        (self.sender_id == a && self.recipient_id == b)
            || (self.sender_id == b && self.recipient_id == a)
    }
}
