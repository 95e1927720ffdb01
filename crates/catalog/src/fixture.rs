use chrono::NaiveDate;
use shared::domain::{EventDetail, EventId};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    title: &str,
    date: NaiveDate,
    time: &str,
    venue: &str,
    short_description: &str,
    full_description: &str,
    organizer: (&str, &str, Option<&str>),
    map_placeholder: &str,
) -> EventDetail {
    let (organizer_name, organizer_email, organizer_phone) = organizer;
    EventDetail {
        id: EventId::new(id),
        title: title.to_string(),
        date,
        time: time.to_string(),
        venue: venue.to_string(),
        short_description: short_description.to_string(),
        full_description: full_description.to_string(),
        organizer_name: organizer_name.to_string(),
        organizer_email: organizer_email.to_string(),
        organizer_phone: organizer_phone.map(str::to_string),
        map_placeholder: map_placeholder.to_string(),
    }
}

pub(crate) fn canonical_records() -> Vec<EventDetail> {
    vec![
        record(
            "1",
            "Test Automation with Selenium & Python",
            day(2024, 9, 15),
            "18:00",
            "Tech Hub Downtown, Conference Room A",
            "Learn advanced Selenium techniques and best practices for Python-based test automation.",
            "Join us for an in-depth workshop on test automation using Selenium WebDriver with Python. \
             We'll cover advanced techniques including page object model, data-driven testing, parallel \
             execution, and CI/CD integration. Perfect for QA engineers looking to enhance their automation skills.",
            ("Sarah Johnson", "sarah.johnson@testpro.com", Some("+1-555-0123")),
            "Map showing Tech Hub Downtown location at 123 Main St",
        ),
        record(
            "2",
            "API Testing Workshop with Postman & Newman",
            day(2024, 9, 22),
            "14:00",
            "Innovation Center, Room 305",
            "Master API testing strategies using Postman collections and Newman automation.",
            "Comprehensive workshop covering REST API testing methodologies. Learn how to create robust \
             test suites in Postman, automate them with Newman, integrate with CI/CD pipelines, and implement \
             effective API testing strategies for microservices architecture.",
            ("Mike Chen", "mike.chen@apitest.org", Some("+1-555-0456")),
            "Map showing Innovation Center at 456 Oak Avenue",
        ),
        record(
            "3",
            "Mobile Testing Strategies for iOS & Android",
            day(2024, 9, 29),
            "19:00",
            "Digital Campus, Auditorium B",
            "Explore mobile testing approaches, tools, and device cloud solutions.",
            "Deep dive into mobile application testing covering native, hybrid, and web apps. We'll explore \
             Appium, Espresso, XCUITest, device cloud solutions, and discuss challenges unique to mobile testing \
             including device fragmentation, network conditions, and performance testing.",
            ("Lisa Rodriguez", "lisa.rodriguez@mobileqa.com", Some("+1-555-0789")),
            "Map showing Digital Campus at 789 Pine Street",
        ),
        record(
            "4",
            "Performance Testing with JMeter",
            day(2024, 10, 6),
            "13:30",
            "Startup Incubator, Meeting Room 1",
            "Learn load testing fundamentals and advanced JMeter scripting techniques.",
            "Hands-on session covering performance testing fundamentals using Apache JMeter. Topics include \
             test plan creation, load modeling, result analysis, distributed testing, and integration with \
             monitoring tools. Bring your laptop for practical exercises.",
            ("David Kumar", "david.kumar@perftest.net", None),
            "Map showing Startup Incubator at 321 Elm Drive",
        ),
        record(
            "5",
            "Behavior Driven Development with Cucumber",
            day(2024, 10, 13),
            "17:00",
            "Community College, Lab 204",
            "Introduction to BDD principles and Cucumber framework implementation.",
            "Learn Behavior Driven Development (BDD) principles and how to implement them using Cucumber. \
             We'll cover Gherkin syntax, step definitions, scenario design, and collaboration between developers, \
             testers, and business analysts for better software quality.",
            ("Jennifer Thompson", "jennifer.thompson@bddworkshop.com", Some("+1-555-0234")),
            "Map showing Community College at 567 Maple Road",
        ),
    ]
}
