//! Modal descriptors
//!
//! The UI layer renders these; buttons call back into the flow that owns
//! the modal, identified by `purpose`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalVariant {
    Info,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ModalActions {
    Single { text: String },
    Dual { first: String, second: String },
}

/// Which flow a modal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalPurpose {
    DiaryForm,
    DiscardDraft,
    DiaryRegistered,
    DeleteDiary,
    LoginRequired,
    PageLoginRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modal {
    pub purpose: ModalPurpose,
    pub variant: ModalVariant,
    pub title: String,
    pub message: String,
    pub actions: ModalActions,
}

impl Modal {
    fn new(
        purpose: ModalPurpose,
        variant: ModalVariant,
        title: &str,
        message: &str,
        actions: ModalActions,
    ) -> Self {
        Self {
            purpose,
            variant,
            title: title.to_string(),
            message: message.to_string(),
            actions,
        }
    }

    fn single(text: &str) -> ModalActions {
        ModalActions::Single {
            text: text.to_string(),
        }
    }

    fn dual(first: &str, second: &str) -> ModalActions {
        ModalActions::Dual {
            first: first.to_string(),
            second: second.to_string(),
        }
    }

    /// The diary writing form
    pub fn diary_form() -> Self {
        Self::new(
            ModalPurpose::DiaryForm,
            ModalVariant::Info,
            "일기 쓰기",
            "오늘 기분은 어땠나요?",
            Self::dual("닫기", "등록하기"),
        )
    }

    /// Asked when the diary form is closed
    pub fn discard_draft() -> Self {
        Self::new(
            ModalPurpose::DiscardDraft,
            ModalVariant::Info,
            "등록 취소",
            "작성 중인 일기가 있습니다. 정말 취소하시겠습니까?",
            Self::dual("계속 작성", "등록 취소"),
        )
    }

    pub fn diary_registered() -> Self {
        Self::new(
            ModalPurpose::DiaryRegistered,
            ModalVariant::Info,
            "등록 완료",
            "일기가 성공적으로 등록되었습니다.",
            Self::single("확인"),
        )
    }

    pub fn delete_diary() -> Self {
        Self::new(
            ModalPurpose::DeleteDiary,
            ModalVariant::Danger,
            "일기 삭제",
            "일기를 삭제 하시겠어요?",
            Self::dual("취소", "삭제"),
        )
    }

    /// Shown by the auth guard when a gated action is attempted signed out
    pub fn login_required() -> Self {
        Self::new(
            ModalPurpose::LoginRequired,
            ModalVariant::Info,
            "로그인하시겠습니까?",
            "이 기능을 사용하려면 로그인이 필요합니다.",
            Self::dual("로그인하러가기", "취소"),
        )
    }

    /// Shown by the auth guard when a members-only page is opened signed out
    pub fn page_login_required() -> Self {
        Self::new(
            ModalPurpose::PageLoginRequired,
            ModalVariant::Info,
            "로그인해주세요",
            "이 페이지에 접근하려면 로그인이 필요합니다.",
            Self::single("확인"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(Modal::delete_diary()).unwrap();

        assert_eq!(value["purpose"], "deleteDiary");
        assert_eq!(value["variant"], "danger");
        assert_eq!(value["actions"]["kind"], "dual");
        assert_eq!(value["actions"]["second"], "삭제");
    }

    #[test]
    fn test_single_action_modal() {
        match Modal::diary_registered().actions {
            ModalActions::Single { text } => assert_eq!(text, "확인"),
            other => panic!("unexpected actions: {:?}", other),
        }
    }
}
