use super::*;
use crate::config::PROFILE;

#[test]
fn profile_has_three_links_in_order() {
    let links = profile_links(&PROFILE);
    let icons = links.iter().map(|l| l.icon).collect::<Vec<_>>();
    assert_eq!(icons, vec![SocialIcon::Email, SocialIcon::LinkedIn, SocialIcon::Behance]);
}

#[test]
fn email_link_uses_mailto_in_same_context() {
    let links = profile_links(&PROFILE);
    let email = &links[0];
    assert_eq!(email.href, "mailto:sravanworld95@gmail.com");
    assert_eq!(email.aria_label, "Email Sai");
    assert_eq!(email.tooltip, "Email Sai");
    assert_eq!(email.target(), None);
    assert_eq!(email.rel(), None);
}

#[test]
fn external_links_open_without_opener_or_referrer() {
    for link in profile_links(&PROFILE).iter().filter(|l| l.external) {
        assert!(link.href.starts_with("https://"));
        assert_eq!(link.target(), Some("_blank"));
        assert_eq!(link.rel(), Some("noopener noreferrer"));
    }
}

#[test]
fn behance_tooltip_differs_from_label() {
    let links = profile_links(&PROFILE);
    let behance = &links[2];
    assert_eq!(behance.aria_label, "View work on Behance");
    assert_eq!(behance.tooltip, "See work samples");
}
