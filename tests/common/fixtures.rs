//! Reusable content for staging tests.

/// Date every test stages under (`--today`)
pub const TODAY: &str = "2016-11-02";
pub const YEAR: &str = "2016";

pub const SAMBA_VERSION: &str = "2.7.3";

/// Release artifacts of samba at `SAMBA_VERSION`, relative to the checkout
pub const SAMBA_ARTIFACTS: &[&str] = &[
    "web/war/target/admin.web-2.7.3.war",
    "studentgui/target/studentgui.portal-2.7.3.war",
    "database/target/database-2.7.3-database.zip",
];

/// Minimal descriptor with the project version on its own line
pub fn pom(version: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project>
  <modelVersion>4.0.0</modelVersion>
  <groupId>no.sio</groupId>
  <artifactId>samba</artifactId>
  <version>{}</version>
</project>
"#,
        version
    )
}
