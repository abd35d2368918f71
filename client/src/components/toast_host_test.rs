use super::*;

#[test]
fn toast_class_carries_kind_modifier() {
    assert_eq!(toast_class(NoticeKind::Success), "toast toast--success");
    assert_eq!(toast_class(NoticeKind::Info), "toast toast--info");
    assert_eq!(toast_class(NoticeKind::Error), "toast toast--error");
}
