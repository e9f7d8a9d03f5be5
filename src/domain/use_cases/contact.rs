use std::sync::Arc;

use validator::Validate;

use crate::{
    entities::contact_message::{ContactMessage, ContactMessageListResponse, NewContactMessage},
    errors::AppError,
    repositories::contact_message::ContactMessageRepository,
};

pub struct ContactMessageHandler<R = dyn ContactMessageRepository>
where
    R: ContactMessageRepository + ?Sized,
{
    pub contact_repo: Arc<R>,
}

impl<R> ContactMessageHandler<R>
where
    R: ContactMessageRepository + ?Sized,
{
    pub fn new(contact_repo: Arc<R>) -> Self {
        ContactMessageHandler { contact_repo }
    }

    /// Stores a message; every new message starts unread
    pub async fn record_message(&self, mut request: NewContactMessage) -> Result<ContactMessage, AppError> {
        request.name = request.name.trim().to_string();
        request.email = request.email.trim().to_lowercase();
        request.validate()?;

        let message = self.contact_repo.create_contact_message(&request).await?;

        tracing::info!(message_id = message.id, "Contact message recorded");

        Ok(message)
    }

    /// Lists contact messages, newest first
    pub async fn list_messages(&self, unread_only: bool) -> Result<ContactMessageListResponse, AppError> {
        let messages = self.contact_repo.list_contact_messages(unread_only).await?;
        let unread = messages.iter().filter(|m| !m.read).count();

        Ok(ContactMessageListResponse {
            total: messages.len(),
            unread,
            messages,
        })
    }

    /// Flips the read flag of a message
    pub async fn mark_read(&self, id: i64, read: bool) -> Result<ContactMessage, AppError> {
        self.contact_repo.set_contact_message_read(id, read).await
    }
}
