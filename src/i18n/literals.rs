// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale-independent content: values that read the same in every language.

/// Name printed in the `about` block.
pub const USER_NAME: &str = "Lê Quyền";

/// Technology tags listed by `stack`, in display order.
pub const STACK: [&str; 10] = [
    "Linux (RHEL)",
    "Docker",
    "Kubernetes",
    "AWS",
    "Terraform",
    "Ansible",
    "Bash",
    "Python",
    "Nginx",
    "PostgreSQL",
];

pub const SMM_LABEL: &str = "smm.quyenlt.com";
pub const SMM_URL: &str = "https://smm.quyenlt.com/";

/// Contact channels, in the order `contact` prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactChannel {
    Email,
    Facebook,
    Telegram,
    Youtube,
}

impl ContactChannel {
    pub fn all() -> &'static [ContactChannel] {
        &[
            ContactChannel::Email,
            ContactChannel::Facebook,
            ContactChannel::Telegram,
            ContactChannel::Youtube,
        ]
    }

    /// Text shown for the channel.
    pub fn value(self) -> &'static str {
        match self {
            ContactChannel::Email => "quyenle.10082000@gmail.com",
            ContactChannel::Facebook => "facebook.com/NejiHoangDe.org",
            ContactChannel::Telegram => "t.me/fbtobi",
            ContactChannel::Youtube => "youtube.com/@NejiHoangdeChannel",
        }
    }

    /// Link target, for channels that open in a browser.
    pub fn href(self) -> Option<&'static str> {
        match self {
            ContactChannel::Email => None,
            ContactChannel::Facebook => Some("https://www.facebook.com/NejiHoangDe.org/"),
            ContactChannel::Telegram => Some("https://t.me/fbtobi"),
            ContactChannel::Youtube => Some("https://www.youtube.com/@NejiHoangdeChannel"),
        }
    }
}
