// SPDX-License-Identifier: PMPL-1.0-or-later

//! Content catalog for profile-term.
//!
//! Every user-facing string lives in one [`ContentTable`] per [`Locale`],
//! embedded at compile time. Because each locale is an instance of the same
//! struct, the tables are structurally identical by construction: a missing
//! field is a compile error, not a blank render.
//!
//! ## Adding a new locale
//!
//! 1. Add a variant to [`Locale`]
//! 2. Add arms to `Locale::code()`, `Locale::from_alias()` and `Locale::other()`
//! 3. Create a `static XX: ContentTable` below
//! 4. Add `Locale::Xx => &XX` to the match in [`lookup`]
//!
//! [`verify_catalog`] then rejects any field left blank.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Display languages of the terminal.
///
/// `En` is the primary locale, `Vi` the secondary one. Sessions start in
/// `Vi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[serde(alias = "vn")]
    Vi,
}

impl Locale {
    /// ISO 639-1 two-letter code for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    /// Resolve an alias typed after `lang`.
    ///
    /// Matching is exact; callers lower-case first. `vn` is accepted as a
    /// colloquial spelling of `vi`.
    pub fn from_alias(alias: &str) -> Option<Locale> {
        match alias {
            "en" => Some(Locale::En),
            "vi" | "vn" => Some(Locale::Vi),
            _ => None,
        }
    }

    /// All supported locales, in display order.
    pub fn all() -> &'static [Locale] {
        &[Locale::Vi, Locale::En]
    }

    /// The other member of the two-locale set.
    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Vi,
            Locale::Vi => Locale::En,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::Vi
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One-line descriptions shown by `help`.
#[derive(Debug, Clone, Serialize)]
pub struct CommandHelp {
    pub about: &'static str,
    pub stack: &'static str,
    pub smm: &'static str,
    pub contact: &'static str,
    pub lang: &'static str,
    pub clear: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutLabels {
    pub user: &'static str,
    pub role: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SmmContent {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactLabels {
    pub email: &'static str,
    pub facebook: &'static str,
    pub telegram: &'static str,
    pub youtube: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub status: &'static str,
    pub description: &'static str,
}

/// All localized content for one locale.
#[derive(Debug, Clone, Serialize)]
pub struct ContentTable {
    pub locale_name: &'static str,
    pub welcome: &'static str,
    pub help_title: &'static str,
    pub commands: CommandHelp,
    pub role: &'static str,
    pub status: &'static str,
    pub session: &'static str,
    pub bio: &'static str,
    pub about_labels: AboutLabels,
    pub smm: SmmContent,
    pub contact: ContactLabels,
    pub projects: &'static [Project],
    pub not_found: &'static str,
    pub user: &'static str,
    pub lang_switched: &'static str,
    pub lang_usage: &'static str,
    pub toggle_notice: &'static str,
}

impl ContentTable {
    /// Every string field, paired with its dotted name.
    pub fn fields(&self) -> Vec<(String, &'static str)> {
        let mut fields: Vec<(String, &'static str)> = vec![
            ("locale_name".into(), self.locale_name),
            ("welcome".into(), self.welcome),
            ("help_title".into(), self.help_title),
            ("commands.about".into(), self.commands.about),
            ("commands.stack".into(), self.commands.stack),
            ("commands.smm".into(), self.commands.smm),
            ("commands.contact".into(), self.commands.contact),
            ("commands.lang".into(), self.commands.lang),
            ("commands.clear".into(), self.commands.clear),
            ("role".into(), self.role),
            ("status".into(), self.status),
            ("session".into(), self.session),
            ("bio".into(), self.bio),
            ("about_labels.user".into(), self.about_labels.user),
            ("about_labels.role".into(), self.about_labels.role),
            ("about_labels.status".into(), self.about_labels.status),
            ("smm.title".into(), self.smm.title),
            ("smm.description".into(), self.smm.description),
            ("contact.email".into(), self.contact.email),
            ("contact.facebook".into(), self.contact.facebook),
            ("contact.telegram".into(), self.contact.telegram),
            ("contact.youtube".into(), self.contact.youtube),
            ("not_found".into(), self.not_found),
            ("user".into(), self.user),
            ("lang_switched".into(), self.lang_switched),
            ("lang_usage".into(), self.lang_usage),
            ("toggle_notice".into(), self.toggle_notice),
        ];
        for (idx, project) in self.projects.iter().enumerate() {
            fields.push((format!("projects[{idx}].title"), project.title));
            fields.push((format!("projects[{idx}].status"), project.status));
            fields.push((format!("projects[{idx}].description"), project.description));
        }
        fields
    }
}

/// Content table for `locale`.
pub fn lookup(locale: Locale) -> &'static ContentTable {
    match locale {
        Locale::En => &EN,
        Locale::Vi => &VI,
    }
}

/// Check that every locale's table is fully populated.
///
/// Fails with the list of blank fields, and when locales disagree on the
/// number of project records.
pub fn verify_catalog() -> Result<()> {
    let mut problems = Vec::new();
    let expected_projects = lookup(Locale::En).projects.len();
    for &locale in Locale::all() {
        let table = lookup(locale);
        for (name, value) in table.fields() {
            if value.trim().is_empty() {
                problems.push(format!("{locale}: {name} is blank"));
            }
        }
        if table.projects.len() != expected_projects {
            problems.push(format!(
                "{locale}: {} projects, expected {}",
                table.projects.len(),
                expected_projects
            ));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("content catalog incomplete: {}", problems.join("; ")))
    }
}

// ─── English ────────────────────────────────────────────────────────

static EN: ContentTable = ContentTable {
    locale_name: "English",
    welcome: "Welcome to Le Quyen's System Interface. Type 'help' to initialize connection.",
    help_title: "Available commands:",
    commands: CommandHelp {
        about: "// System Administrator Bio",
        stack: "// View Core Technologies",
        smm: "// Social Media Marketing",
        contact: "// Connection Protocols",
        lang: "// Switch Language (lang vi/en)",
        clear: "// Clear Buffer",
    },
    role: "IT System",
    status: "🟢 Active (Uptime 99.99%)",
    session: "tty1",
    bio: "Hi there, I'm QuyenLT.\n\n\
          I'm passionate about IT Systems. My work revolves around 'keeping the beat' for computer \
          systems and servers to ensure smooth operation. From configuring servers and network \
          security to troubleshooting issues on various operating systems, I always look for the \
          most optimal and intelligent solutions.\n\n\
          Website quyenlt.com is where I share my practical hands-on experience in the System \
          profession, with the aim of making complex techniques simpler and more accessible to \
          everyone.",
    about_labels: AboutLabels {
        user: "User",
        role: "Role",
        status: "Status",
    },
    smm: SmmContent {
        title: "Social Media Marketing",
        description: "Fast & Automated Interaction Growth.\n\n\
                      Providing high-quality Facebook, Instagram, TikTok, YouTube services at the \
                      cheapest market prices.",
    },
    contact: ContactLabels {
        email: "Email",
        facebook: "Facebook",
        telegram: "Telegram",
        youtube: "Youtube",
    },
    projects: &[
        Project {
            title: "Hybrid Cloud Migration",
            status: "COMPLETED",
            description: "Migrated Mission-Critical DBs to AWS RDS. Reduced latency by 40%.",
        },
        Project {
            title: "Security Hardening",
            status: "ACTIVE",
            description: "Deployed centralized IAM & MFA across 50+ Nodes.",
        },
    ],
    not_found: "Err: command not found:",
    user: "User",
    lang_switched: "Language switched to English.",
    lang_usage: "Usage: lang [vi|en]",
    toggle_notice: "System message: Language switched to English",
};

// ─── Vietnamese ─────────────────────────────────────────────────────

static VI: ContentTable = ContentTable {
    locale_name: "Tiếng Việt",
    welcome: "Chào mừng tới với giao diện Info Profile của Mình, để biết thêm về mình, mọi người \
              gõ 'help' hoặc 'ls' để xem nhé!",
    help_title: "Các lệnh khả dụng:",
    commands: CommandHelp {
        about: "// Giới thiệu cá nhân",
        stack: "// Công nghệ sử dụng",
        smm: "// Social Media Marketing",
        contact: "// Thông tin liên hệ",
        lang: "// Đổi ngôn ngữ (lang vi/en)",
        clear: "// Xóa màn hình",
    },
    role: "IT System",
    status: "🟢 Active (Uptime 99.99%)",
    session: "tty1",
    bio: "Chào bạn, mình là QuyenLT.\n\n\
          Mình là một người đam mê IT System. Công việc của mình xoay quanh việc 'giữ nhịp' cho \
          các hệ thống máy tính và máy chủ hoạt động trơn tru. Từ việc cấu hình server, bảo mật \
          mạng cho đến xử lý các sự cố trên mọi hệ điều hành, mình luôn tìm kiếm những cách làm \
          tối ưu và thông minh nhất.\n\n\
          Website quyenlt.com là nơi mình chia sẻ những kinh nghiệm thực chiến trong nghề System, \
          với mong muốn biến những kỹ thuật phức tạp trở nên đơn giản và dễ tiếp cận hơn cho mọi \
          người.",
    about_labels: AboutLabels {
        user: "Người dùng",
        role: "Vai trò",
        status: "Trạng thái",
    },
    smm: SmmContent {
        title: "Social Media Marketing",
        description: "Tăng tương tác nhanh & Tự động\n\n\
                      Cung cấp các dịch vụ Facebook, Instagram, TikTok, YouTube chất lượng cao \
                      với giá rẻ nhất thị trường.",
    },
    contact: ContactLabels {
        email: "Email",
        facebook: "Facebook",
        telegram: "Telegram",
        youtube: "Youtube",
    },
    projects: &[
        Project {
            title: "Di dời Hybrid Cloud",
            status: "HOÀN THÀNH",
            description: "Di chuyển các DB quan trọng lên AWS RDS. Giảm độ trễ 40%.",
        },
        Project {
            title: "Tăng cường Bảo mật",
            status: "ĐANG CHẠY",
            description: "Triển khai IAM & MFA tập trung trên hơn 50 Node Server.",
        },
    ],
    not_found: "Lỗi: không tìm thấy lệnh:",
    user: "Người dùng",
    lang_switched: "Ngôn ngữ đã chuyển sang Tiếng Việt.",
    lang_usage: "Usage: lang [vi|en]",
    toggle_notice: "System message: Language switched to Vietnamese",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_complete() {
        verify_catalog().expect("every locale should be fully populated");
    }

    #[test]
    fn tables_have_same_field_names() {
        let en: Vec<String> = lookup(Locale::En).fields().into_iter().map(|(k, _)| k).collect();
        let vi: Vec<String> = lookup(Locale::Vi).fields().into_iter().map(|(k, _)| k).collect();
        assert_eq!(en, vi);
    }

    #[test]
    fn alias_resolution() {
        assert_eq!(Locale::from_alias("vi"), Some(Locale::Vi));
        assert_eq!(Locale::from_alias("vn"), Some(Locale::Vi));
        assert_eq!(Locale::from_alias("en"), Some(Locale::En));
        assert_eq!(Locale::from_alias("EN"), None);
        assert_eq!(Locale::from_alias("fr"), None);
        assert_eq!(Locale::from_alias(""), None);
    }

    #[test]
    fn code_roundtrip() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_alias(locale.code()), Some(*locale));
        }
    }

    #[test]
    fn other_flips_between_the_two_locales() {
        assert_eq!(Locale::En.other(), Locale::Vi);
        assert_eq!(Locale::Vi.other(), Locale::En);
        assert_eq!(Locale::Vi.other().other(), Locale::Vi);
    }

    #[test]
    fn default_is_vietnamese() {
        assert_eq!(Locale::default(), Locale::Vi);
    }

    #[test]
    fn bios_differ_between_locales() {
        assert_ne!(lookup(Locale::En).bio, lookup(Locale::Vi).bio);
        assert!(lookup(Locale::En).bio.starts_with("Hi there"));
        assert!(lookup(Locale::Vi).bio.starts_with("Chào bạn"));
    }
}
