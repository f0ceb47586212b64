use super::*;

#[test]
fn notice_class_by_kind() {
    assert_eq!(notice_class(NoticeKind::Success), "notice notice--success");
    assert_eq!(notice_class(NoticeKind::Error), "notice notice--error");
}
