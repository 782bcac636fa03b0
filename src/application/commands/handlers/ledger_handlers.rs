//! Ledger Command Handlers

use std::sync::Arc;

use crate::application::commands::{DepositCoins, PurchaseChapter};
use crate::application::error::ApplicationError;
use crate::application::store::LibraryStore;
use crate::domain::account::{DenialReason, PurchaseOutcome, User};
use crate::domain::ledger::Transaction;

// ============================================================================
// PurchaseChapter
// ============================================================================

/// PurchaseChapter Handler
///
/// 首次购买时在同一批次内扣费、记录已购章节并追加一条购买流水；
/// 已拥有直接成功；用户或章节不存在、余额不足时拒绝且不修改任何状态。
pub struct PurchaseChapterHandler {
    store: Arc<LibraryStore>,
}

impl PurchaseChapterHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: PurchaseChapter) -> Result<PurchaseOutcome, ApplicationError> {
        let mut uow = self.store.begin()?;

        if !uow.users()?.iter().any(|u| u.id == command.user_id) {
            return Ok(Self::deny(&command, DenialReason::UserNotFound));
        }

        let Some(chapter) = uow
            .chapters()?
            .iter()
            .find(|c| c.id == command.chapter_id)
            .cloned()
        else {
            return Ok(Self::deny(&command, DenialReason::ChapterNotFound));
        };

        let outcome = match uow.users_mut()?.iter_mut().find(|u| u.id == command.user_id) {
            Some(user) => user.purchase(&chapter),
            None => PurchaseOutcome::Denied(DenialReason::UserNotFound),
        };

        match outcome {
            PurchaseOutcome::Purchased { balance } => {
                let transaction =
                    Transaction::purchase(command.user_id.clone(), chapter.price, &chapter.title);
                let kind = transaction.kind.as_str();
                uow.record_transaction(transaction)?;
                uow.commit()?;

                tracing::info!(
                    user_id = %command.user_id,
                    kind = kind,
                    chapter_id = %command.chapter_id,
                    price = chapter.price,
                    balance = balance,
                    "Chapter purchased"
                );
            }
            PurchaseOutcome::AlreadyOwned => {
                tracing::debug!(
                    user_id = %command.user_id,
                    chapter_id = %command.chapter_id,
                    "Chapter already owned"
                );
            }
            PurchaseOutcome::Denied(reason) => return Ok(Self::deny(&command, reason)),
        }

        Ok(outcome)
    }

    fn deny(command: &PurchaseChapter, reason: DenialReason) -> PurchaseOutcome {
        tracing::warn!(
            user_id = %command.user_id,
            chapter_id = %command.chapter_id,
            reason = ?reason,
            "Chapter purchase denied"
        );
        PurchaseOutcome::Denied(reason)
    }
}

// ============================================================================
// DepositCoins
// ============================================================================

/// DepositCoins Handler - 增加余额并追加一条充值流水，用户不存在时返回 None
pub struct DepositCoinsHandler {
    store: Arc<LibraryStore>,
}

impl DepositCoinsHandler {
    pub fn new(store: Arc<LibraryStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self, command: DepositCoins) -> Result<Option<User>, ApplicationError> {
        if command.amount == 0 {
            return Err(ApplicationError::validation("Deposit amount must be positive"));
        }

        let mut uow = self.store.begin()?;

        let Some(user) = uow.users_mut()?.iter_mut().find(|u| u.id == command.user_id) else {
            tracing::debug!(user_id = %command.user_id, "Deposit skipped, user not found");
            return Ok(None);
        };

        user.deposit(command.amount);
        let user = user.clone();
        let transaction = Transaction::deposit(user.id.clone(), command.amount);
        let kind = transaction.kind.as_str();
        uow.record_transaction(transaction)?;
        uow.commit()?;

        tracing::info!(
            user_id = %user.id,
            kind = kind,
            amount = command.amount,
            balance = user.coins,
            "Coins deposited"
        );

        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::seeded_store;
    use crate::domain::account::UserId;
    use crate::domain::ledger::TransactionKind;
    use crate::domain::novel::{Chapter, ChapterId, NovelId};

    fn purchase(user_id: &str, chapter_id: &str) -> PurchaseChapter {
        PurchaseChapter {
            user_id: UserId::from(user_id),
            chapter_id: ChapterId::from(chapter_id),
        }
    }

    fn reader(store: &LibraryStore) -> User {
        store
            .begin()
            .unwrap()
            .users()
            .unwrap()
            .iter()
            .find(|u| u.id.as_str() == "user1")
            .cloned()
            .unwrap()
    }

    fn add_expensive_chapter(store: &LibraryStore) -> ChapterId {
        let chapter = Chapter::new(NovelId::from("1"), "Chapter 99", "", 99, true, 9999);
        let id = chapter.id.clone();
        let mut uow = store.begin().unwrap();
        uow.chapters_mut().unwrap().push(chapter);
        uow.commit().unwrap();
        id
    }

    #[test]
    fn test_first_purchase_deducts_and_records_transaction() {
        let store = seeded_store();
        let handler = PurchaseChapterHandler::new(store.clone());

        let outcome = handler.handle(purchase("user1", "c1-3")).unwrap();

        assert_eq!(outcome, PurchaseOutcome::Purchased { balance: 35 });
        let user = reader(&store);
        assert_eq!(user.coins, 35);
        assert!(user.owns(&ChapterId::from("c1-3")));

        let mut uow = store.begin().unwrap();
        let transactions = uow.transactions().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].amount, 15);
        assert_eq!(transactions[0].kind, TransactionKind::Purchase);
        assert_eq!(transactions[0].user_id, UserId::from("user1"));
    }

    #[test]
    fn test_unaffordable_purchase_is_denied_without_state_change() {
        let store = seeded_store();
        let handler = PurchaseChapterHandler::new(store.clone());
        handler.handle(purchase("user1", "c1-3")).unwrap();
        let expensive = add_expensive_chapter(&store);

        let outcome = handler
            .handle(PurchaseChapter {
                user_id: UserId::from("user1"),
                chapter_id: expensive.clone(),
            })
            .unwrap();

        assert_eq!(
            outcome,
            PurchaseOutcome::Denied(DenialReason::InsufficientCoins {
                balance: 35,
                price: 9999
            })
        );
        let user = reader(&store);
        assert_eq!(user.coins, 35);
        assert!(!user.owns(&expensive));
        assert_eq!(store.begin().unwrap().transactions().unwrap().len(), 1);
    }

    #[test]
    fn test_repurchase_succeeds_without_change() {
        let store = seeded_store();
        let handler = PurchaseChapterHandler::new(store.clone());
        handler.handle(purchase("user1", "c1-3")).unwrap();

        let outcome = handler.handle(purchase("user1", "c1-3")).unwrap();

        assert_eq!(outcome, PurchaseOutcome::AlreadyOwned);
        assert!(outcome.is_success());
        let user = reader(&store);
        assert_eq!(user.coins, 35);
        assert_eq!(user.purchased_chapters.len(), 1);
        assert_eq!(store.begin().unwrap().transactions().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_entities_are_denied() {
        let handler = PurchaseChapterHandler::new(seeded_store());

        assert_eq!(
            handler.handle(purchase("ghost", "c1-3")).unwrap(),
            PurchaseOutcome::Denied(DenialReason::UserNotFound)
        );
        assert_eq!(
            handler.handle(purchase("user1", "missing")).unwrap(),
            PurchaseOutcome::Denied(DenialReason::ChapterNotFound)
        );
    }

    #[test]
    fn test_deposit_adds_coins_and_records_transaction() {
        let store = seeded_store();
        let handler = DepositCoinsHandler::new(store.clone());

        let user = handler
            .handle(DepositCoins {
                user_id: UserId::from("user1"),
                amount: 100,
            })
            .unwrap()
            .unwrap();

        assert_eq!(user.coins, 150);
        let mut uow = store.begin().unwrap();
        let transactions = uow.transactions().unwrap();
        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].kind, TransactionKind::Deposit);
    }

    #[test]
    fn test_deposit_validation_and_missing_user() {
        let handler = DepositCoinsHandler::new(seeded_store());

        let zero = handler.handle(DepositCoins {
            user_id: UserId::from("user1"),
            amount: 0,
        });
        assert!(matches!(zero, Err(ApplicationError::ValidationError(_))));

        let missing = handler
            .handle(DepositCoins {
                user_id: UserId::from("ghost"),
                amount: 10,
            })
            .unwrap();
        assert!(missing.is_none());
    }
}
