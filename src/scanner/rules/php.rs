//! Rule table for PHP sources. Every rule matches case-insensitively.

use super::RuleDef;
use crate::scanner::model::Severity::{Critical, High, Medium};

pub(crate) const RULES: &[RuleDef] = &[
    // sql_injection
    RuleDef {
        id: "php-001",
        pattern: r#"(?i)mysql_query\s*\(\s*\$"#,
        severity: High,
        category: "sql_injection",
        message: "SQL injection via mysql_query with variable input",
    },
    RuleDef {
        id: "php-002",
        pattern: r#"(?i)mysqli_query\s*\(\s*\$"#,
        severity: High,
        category: "sql_injection",
        message: "SQL injection via mysqli_query with variable input",
    },
    RuleDef {
        id: "php-003",
        pattern: r#"(?i)query\s*\(\s*\$"#,
        severity: High,
        category: "sql_injection",
        message: "SQL injection via query method with variable input",
    },
    // xss
    RuleDef {
        id: "php-004",
        pattern: r#"(?i)echo\s+\$_GET\[['"][^'"]+['"]\]"#,
        severity: High,
        category: "xss",
        message: "XSS via echo of $_GET parameter",
    },
    RuleDef {
        id: "php-005",
        pattern: r#"(?i)echo\s+\$_POST\[['"][^'"]+['"]\]"#,
        severity: High,
        category: "xss",
        message: "XSS via echo of $_POST parameter",
    },
    RuleDef {
        id: "php-006",
        pattern: r#"(?i)print\s+\$_GET\[['"][^'"]+['"]\]"#,
        severity: High,
        category: "xss",
        message: "XSS via print of $_GET parameter",
    },
    RuleDef {
        id: "php-007",
        pattern: r#"(?i)<\?php\s+echo\s+\$_"#,
        severity: High,
        category: "xss",
        message: "XSS via direct echo of user input",
    },
    // file_inclusion
    RuleDef {
        id: "php-008",
        pattern: r#"(?i)include\s*\(\s*\$"#,
        severity: High,
        category: "file_inclusion",
        message: "File inclusion via include with variable path",
    },
    RuleDef {
        id: "php-009",
        pattern: r#"(?i)require\s*\(\s*\$"#,
        severity: High,
        category: "file_inclusion",
        message: "File inclusion via require with variable path",
    },
    RuleDef {
        id: "php-010",
        pattern: r#"(?i)include_once\s*\(\s*\$"#,
        severity: High,
        category: "file_inclusion",
        message: "File inclusion via include_once with variable path",
    },
    RuleDef {
        id: "php-011",
        pattern: r#"(?i)require_once\s*\(\s*\$"#,
        severity: High,
        category: "file_inclusion",
        message: "File inclusion via require_once with variable path",
    },
    // command_injection
    RuleDef {
        id: "php-012",
        pattern: r#"(?i)exec\s*\(\s*\$"#,
        severity: Critical,
        category: "command_injection",
        message: "Command injection via exec with variable input",
    },
    RuleDef {
        id: "php-013",
        pattern: r#"(?i)system\s*\(\s*\$"#,
        severity: Critical,
        category: "command_injection",
        message: "Command injection via system with variable input",
    },
    RuleDef {
        id: "php-014",
        pattern: r#"(?i)shell_exec\s*\(\s*\$"#,
        severity: Critical,
        category: "command_injection",
        message: "Command injection via shell_exec with variable input",
    },
    RuleDef {
        id: "php-015",
        pattern: r#"(?i)passthru\s*\(\s*\$"#,
        severity: Critical,
        category: "command_injection",
        message: "Command injection via passthru with variable input",
    },
    RuleDef {
        id: "php-016",
        pattern: r"(?i)`[^`]*\$[^`]*`",
        severity: Critical,
        category: "command_injection",
        message: "Command injection via backtick execution",
    },
    // weak_crypto
    RuleDef {
        id: "php-017",
        pattern: r#"(?i)md5\s*\(\s*\$"#,
        severity: Medium,
        category: "weak_crypto",
        message: "Weak cryptography: MD5",
    },
    RuleDef {
        id: "php-018",
        pattern: r#"(?i)sha1\s*\(\s*\$"#,
        severity: Medium,
        category: "weak_crypto",
        message: "Weak cryptography: SHA1",
    },
    RuleDef {
        id: "php-019",
        pattern: r#"(?i)base64_encode\s*\(\s*\$"#,
        severity: Medium,
        category: "weak_crypto",
        message: "Weak encoding: base64 is not encryption",
    },
    // error_disclosure
    RuleDef {
        id: "php-020",
        pattern: r"(?i)error_reporting\s*\(\s*E_ALL\s*\)",
        severity: Medium,
        category: "error_disclosure",
        message: "Error disclosure: E_ALL reporting enabled",
    },
    RuleDef {
        id: "php-021",
        pattern: r#"(?i)ini_set\s*\(\s*['"]display_errors['"]\s*,\s*true\s*\)"#,
        severity: Medium,
        category: "error_disclosure",
        message: "Error disclosure: display_errors set to true",
    },
    // insecure_file_op
    RuleDef {
        id: "php-022",
        pattern: r#"(?i)fopen\s*\(\s*\$"#,
        severity: High,
        category: "insecure_file_op",
        message: "Insecure file operation: fopen with variable path",
    },
    RuleDef {
        id: "php-023",
        pattern: r#"(?i)file_get_contents\s*\(\s*\$"#,
        severity: High,
        category: "insecure_file_op",
        message: "Insecure file operation: file_get_contents with variable path",
    },
    RuleDef {
        id: "php-024",
        pattern: r#"(?i)file_put_contents\s*\(\s*\$"#,
        severity: High,
        category: "insecure_file_op",
        message: "Insecure file operation: file_put_contents with variable path",
    },
    // session_security
    RuleDef {
        id: "php-025",
        pattern: r"(?i)session_start\s*\(\s*\)",
        severity: Medium,
        category: "session_security",
        message: "session_start without hardened parameters",
    },
    RuleDef {
        id: "php-026",
        pattern: r#"(?i)\$_SESSION\[['"][^'"]+['"]\]\s*=\s*\$"#,
        severity: Medium,
        category: "session_security",
        message: "Direct assignment of user input to $_SESSION",
    },
];
