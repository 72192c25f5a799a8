use core::convert::TryFrom;

use udp_syslog::syslog::header::{Hostname, Rfc3164, Timestamp};
use udp_syslog::{Facility, InvalidArgument, Severity};

const FACILITIES: [Facility; 24] = [
    Facility::LOG_KERN,
    Facility::LOG_USER,
    Facility::LOG_MAIL,
    Facility::LOG_DAEMON,
    Facility::LOG_AUTH,
    Facility::LOG_SYSLOG,
    Facility::LOG_LPR,
    Facility::LOG_NEWS,
    Facility::LOG_UUCP,
    Facility::LOG_CRON,
    Facility::LOG_AUTHPRIV,
    Facility::LOG_FTP,
    Facility::LOG_NTP,
    Facility::LOG_AUDIT,
    Facility::LOG_ALERT,
    Facility::LOG_CLOCK,
    Facility::LOG_LOCAL0,
    Facility::LOG_LOCAL1,
    Facility::LOG_LOCAL2,
    Facility::LOG_LOCAL3,
    Facility::LOG_LOCAL4,
    Facility::LOG_LOCAL5,
    Facility::LOG_LOCAL6,
    Facility::LOG_LOCAL7,
];

const SEVERITIES: [Severity; 8] = [
    Severity::LOG_EMERG,
    Severity::LOG_ALERT,
    Severity::LOG_CRIT,
    Severity::LOG_ERR,
    Severity::LOG_WARNING,
    Severity::LOG_NOTICE,
    Severity::LOG_INFO,
    Severity::LOG_DEBUG,
];

#[test]
fn should_compute_priority_for_every_pair() {
    let mut seen = [false; 192];

    for facility in FACILITIES {
        for severity in SEVERITIES {
            let priority = severity.priority(facility);
            assert_eq!(priority, (facility as u8) * 8 + severity as u8);
            assert!(priority <= 191);
            assert!(!seen[priority as usize], "priority {priority} computed twice");
            seen[priority as usize] = true;
        }
    }

    assert!(seen.iter().all(|seen| *seen));
}

#[test]
fn should_verify_facility_severity_numbering() {
    assert_eq!(Facility::LOG_KERN as u8, 0);
    assert_eq!(Facility::LOG_USER as u8, 1);
    assert_eq!(Facility::default(), Facility::LOG_USER);
    assert_eq!(Facility::LOG_LOCAL7 as u8, 23);
    assert_eq!(Severity::LOG_EMERG as u8, 0);
    assert_eq!(Severity::LOG_DEBUG as u8, 7);

    for code in 0..=23 {
        assert_eq!(Facility::try_from(code).expect("valid facility") as u8, code);
    }
    for level in 0..=7 {
        assert_eq!(Severity::try_from(level).expect("valid severity") as u8, level);
    }

    assert_eq!(Facility::try_from(24), Err(InvalidArgument::Facility(24)));
    assert_eq!(Facility::try_from(255), Err(InvalidArgument::Facility(255)));
    assert_eq!(Severity::try_from(8), Err(InvalidArgument::Severity(8)));
    assert_eq!(Severity::try_from(255), Err(InvalidArgument::Severity(255)));
}

#[test]
fn should_verify_hostname_ctor() {
    assert!(Hostname::new("").is_none());
    assert!(Hostname::new("two words").is_none());
    assert!(Hostname::new("under_score").is_none());

    assert_eq!(Hostname::new("node1").expect("valid hostname").as_str(), "node1");
    assert_eq!(Hostname::new("node-1.example.com").expect("valid hostname").as_str(), "node-1.example.com");
    assert_eq!(Hostname::unknown().as_str(), "unknown");

    let mut name = String::new();
    for idx in 0..64 {
        name.push(char::from(b'a' + idx % 9));
    }
    assert_eq!(Hostname::new(&name).expect("64 byte hostname").as_str(), name);
    name.push('z');
    assert!(Hostname::new(&name).is_none());
}

#[test]
fn should_encode_rfc3164_wire_format() {
    let hostname = Hostname::new("node1").expect("valid hostname");

    //March 3, 04:05:06 keeps two spaces before single digit day
    let message = Rfc3164 {
        pri: Severity::LOG_ERR.priority(Facility::LOG_USER),
        timestamp: Timestamp {
            month: 2,
            day: 3,
            hour: 4,
            min: 5,
            sec: 6,
        },
        hostname: &hostname,
        msg: "disk full",
    };
    let payload = message.encode().expect("encode");
    assert_eq!(payload, "<11>Mar  3 04:05:06 node1 disk full");
    assert!(payload.is_ascii());
    assert!(!payload.ends_with('\n'));

    //Two digit day has no extra padding
    let message = Rfc3164 {
        pri: Severity::LOG_DEBUG.priority(Facility::LOG_LOCAL7),
        timestamp: Timestamp {
            month: 10,
            day: 13,
            hour: 23,
            min: 59,
            sec: 7,
        },
        hostname: &hostname,
        msg: "rotation complete",
    };
    assert_eq!(message.encode().expect("encode"), "<191>Nov 13 23:59:07 node1 rotation complete");
}

#[test]
fn should_encode_every_month_abbreviation() {
    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    let hostname = Hostname::new("node1").expect("valid hostname");
    for (month, expected) in MONTHS.iter().enumerate() {
        let message = Rfc3164 {
            pri: 11,
            timestamp: Timestamp {
                month: month as u8,
                day: 1,
                hour: 0,
                min: 0,
                sec: 0,
            },
            hostname: &hostname,
            msg: "month check",
        };
        let payload = message.encode().expect("encode");
        assert_eq!(payload, format!("<11>{expected}  1 00:00:00 node1 month check"));
    }
}

#[test]
fn should_reject_non_ascii_text() {
    let hostname = Hostname::new("node1").expect("valid hostname");
    let message = Rfc3164 {
        pri: 11,
        timestamp: Timestamp::epoch(),
        hostname: &hostname,
        msg: "disk füll",
    };
    assert_eq!(message.encode(), Err(InvalidArgument::NotAscii));
}

#[test]
fn should_encode_epoch_fallback_timestamp() {
    let hostname = Hostname::new("node1").expect("valid hostname");
    let message = Rfc3164 {
        pri: 0,
        timestamp: Timestamp::epoch(),
        hostname: &hostname,
        msg: "clock unavailable",
    };
    assert_eq!(message.encode().expect("encode"), "<0>Jan  1 00:00:00 node1 clock unavailable");
}
