// Local fallback resolver
// Keyword-routes a message to a canned answer when the remote path is not used.
// Categories are checked in table order and the first match wins; keyword sets
// overlap, so the order is the tie-break.

use crate::pipeline::response::{ResolvedResponse, ASSISTANT_LABEL};

/// Second source label on every fallback answer
pub const KNOWLEDGE_BASE_LABEL: &str = "Local Knowledge Base";

/// How a keyword is matched against the lower-cased message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// Anywhere in the message
    Substring(&'static str),
    /// As a whole alphanumeric word
    Word(&'static str),
}

impl Keyword {
    fn matches(&self, lower: &str) -> bool {
        match self {
            Keyword::Substring(needle) => lower.contains(needle),
            Keyword::Word(word) => lower
                .split(|c: char| !c.is_alphanumeric())
                .any(|token| token == *word),
        }
    }
}

/// Fallback topic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Eligibility, entrance exams, application steps
    Admissions,
    /// BE and MBA programs
    Courses,
    /// Labs, hostels, amenities
    Campus,
    /// Recruiters and placement support
    Placements,
    /// Fests, clubs, workshops
    Events,
    /// Address, phone, transport
    Contact,
    /// Capabilities overview when nothing matches
    Overview,
}

/// Priority order of the keyword categories
pub const CATEGORY_ORDER: [Category; 6] = [
    Category::Admissions,
    Category::Courses,
    Category::Campus,
    Category::Placements,
    Category::Events,
    Category::Contact,
];

impl Category {
    /// Keywords that select this category
    pub fn keywords(&self) -> &'static [Keyword] {
        use Keyword::{Substring, Word};
        match self {
            Category::Admissions => &[
                Substring("admission"),
                Substring("eligibility"),
                Substring("apply"),
            ],
            Category::Courses => &[
                Substring("course"),
                Substring("program"),
                Substring("degree"),
                Word("be"),
                Word("mba"),
            ],
            Category::Campus => &[
                Substring("campus"),
                Substring("hostel"),
                Substring("facilities"),
                Substring("infrastructure"),
            ],
            Category::Placements => &[
                Substring("placement"),
                Substring("job"),
                Substring("career"),
                Substring("company"),
                Substring("package"),
            ],
            Category::Events => &[
                Substring("event"),
                Substring("fest"),
                Substring("activity"),
                Substring("club"),
                Substring("cultural"),
            ],
            Category::Contact => &[
                Substring("location"),
                Substring("address"),
                Substring("contact"),
                Substring("phone"),
                Substring("email"),
            ],
            Category::Overview => &[],
        }
    }

    /// Fixed confidence of this category's answer
    pub fn confidence(&self) -> u8 {
        match self {
            Category::Admissions => 92,
            Category::Courses => 94,
            Category::Campus => 91,
            Category::Placements => 89,
            Category::Events => 88,
            Category::Contact => 96,
            Category::Overview => 85,
        }
    }

    /// First source label of this category's answer
    pub fn source(&self) -> &'static str {
        match self {
            Category::Admissions => "MITK Official Information",
            Category::Courses => "MITK Academic Department",
            Category::Campus => "MITK Campus Administration",
            Category::Placements => "MITK Placement Cell",
            Category::Events => "MITK Student Affairs",
            Category::Contact => "MITK Official Directory",
            Category::Overview => ASSISTANT_LABEL,
        }
    }

    /// Canned HTML answer
    pub fn answer(&self) -> &'static str {
        match self {
            Category::Admissions => ADMISSIONS_HTML,
            Category::Courses => COURSES_HTML,
            Category::Campus => CAMPUS_HTML,
            Category::Placements => PLACEMENTS_HTML,
            Category::Events => EVENTS_HTML,
            Category::Contact => CONTACT_HTML,
            Category::Overview => OVERVIEW_HTML,
        }
    }

    fn matches(&self, lower: &str) -> bool {
        self.keywords().iter().any(|keyword| keyword.matches(lower))
    }

    /// Build the resolved response for this category
    pub fn response(&self) -> ResolvedResponse {
        ResolvedResponse::new(
            self.answer(),
            self.confidence(),
            vec![self.source().to_string(), KNOWLEDGE_BASE_LABEL.to_string()],
            None,
        )
    }
}

/// Pick the category for a message
pub fn classify(message: &str) -> Category {
    let lower = message.to_lowercase();
    CATEGORY_ORDER
        .iter()
        .copied()
        .find(|category| category.matches(&lower))
        .unwrap_or(Category::Overview)
}

/// Resolve a message from local knowledge only
pub fn resolve(message: &str) -> ResolvedResponse {
    let category = classify(message);
    tracing::debug!(?category, "Fallback category selected");
    category.response()
}

const ADMISSIONS_HTML: &str = r#"<h3>🎓 MITK Admission Process</h3>

<p><strong>Eligibility:</strong> 10+2 with Physics, Chemistry, Mathematics (minimum 45% for general category)</p>

<p><strong>Entrance Exams:</strong> Karnataka CET, COMEDK UGET, JEE Main</p>

<p><strong>Application Process:</strong></p>
<ul>
<li>Check eligibility criteria for your chosen course (BE or MBA)</li>
<li>Gather required documents (10th &amp; 12th mark sheets, certificates, ID proof)</li>
<li>Fill application form online on MITK website</li>
<li>Submit application with supporting documents</li>
<li>Pay application fee as required</li>
</ul>

<p><strong>Contact Information:</strong></p>
<ul>
<li>Phone: +91-8254-237630</li>
<li>Email: info@mitkundapura.com</li>
<li>Website: <a href="https://www.mitkundapura.com" target="_blank">www.mitkundapura.com</a></li>
</ul>

<p>For the most accurate and up-to-date information, please visit the MITK website directly or contact the admissions office.</p>"#;

const COURSES_HTML: &str = r#"<h3>📚 MITK Academic Programs</h3>

<p><strong>Undergraduate Programs (BE) - 4 Years:</strong></p>
<ul>
<li>Computer Science Engineering (CSE) - Intake: 120</li>
<li>Artificial Intelligence &amp; Machine Learning (AI/ML) - Intake: 60</li>
<li>Electronics &amp; Communication Engineering (ECE)</li>
<li>Mechanical Engineering (ME)</li>
<li>Civil Engineering (CE)</li>
</ul>

<p><strong>Postgraduate Programs:</strong></p>
<ul>
<li>MBA - 2 Years</li>
<li>Specializations: Finance, Marketing, Human Resources</li>
<li>Dual specialization options available</li>
</ul>

<p><strong>Affiliation:</strong> All programs are affiliated with Visvesvaraya Technological University (VTU), Belagavi and approved by AICTE.</p>

<p>Each program focuses on both theoretical knowledge and practical application with modern laboratory facilities.</p>"#;

const CAMPUS_HTML: &str = r#"<h3>🏫 MITK Campus Facilities</h3>

<p><strong>Academic Facilities:</strong></p>
<ul>
<li>Modern computer labs with latest software</li>
<li>Electronics and communication labs</li>
<li>Mechanical workshops and labs</li>
<li>Civil engineering labs</li>
<li>Digital library with e-journals and books</li>
</ul>

<p><strong>Student Amenities:</strong></p>
<ul>
<li>Separate hostels for boys and girls with Wi-Fi</li>
<li>Hygienic cafeteria with vegetarian and non-vegetarian options</li>
<li>Indoor and outdoor sports facilities</li>
<li>On-campus medical assistance</li>
<li>College bus transportation from various routes</li>
</ul>

<p><strong>Innovation Hub:</strong></p>
<ul>
<li>Technology Business Incubator (TBI) for startups</li>
<li>Research and development facilities</li>
</ul>

<p>The campus is located at Moodlakatte, near Kundapura Railway Station, providing easy accessibility.</p>"#;

const PLACEMENTS_HTML: &str = r#"<h3>💼 MITK Placement Services</h3>

<p><strong>Placement Statistics:</strong></p>
<ul>
<li>Average Package: 3.5 LPA</li>
<li>Highest Package: 8 LPA</li>
<li>Multiple placement opportunities annually</li>
</ul>

<p><strong>Top Recruiting Companies:</strong></p>
<ul>
<li>Infosys</li>
<li>Wipro</li>
<li>TCS (Tata Consultancy Services)</li>
<li>Tech Mahindra</li>
<li>Capgemini</li>
</ul>

<p><strong>Placement Support Services:</strong></p>
<ul>
<li>Pre-placement training and preparation</li>
<li>Soft skills development workshops</li>
<li>Aptitude test preparation</li>
<li>Mock interviews and group discussions</li>
<li>Campus recruitment drives</li>
</ul>

<p><strong>Recruitment Process:</strong></p>
<p>Companies typically conduct pre-placement talks, aptitude tests, technical interviews, and HR interviews on campus.</p>"#;

const EVENTS_HTML: &str = r#"<h3>🎉 MITK Events &amp; Activities</h3>

<p><strong>Technical Events:</strong></p>
<ul>
<li><strong>Cerebrox:</strong> AI &amp; ML technical forum with seminars, workshops, and project presentations</li>
<li><strong>Saavishkaar:</strong> Annual technical fest featuring project exhibitions and competitions</li>
</ul>

<p><strong>Cultural Events:</strong></p>
<ul>
<li><strong>Mridula:</strong> Annual cultural fest with music, dance, and drama competitions</li>
<li>Inter-college cultural competitions</li>
<li>Student talent shows and performances</li>
</ul>

<p><strong>Student Development Programs:</strong></p>
<ul>
<li>Skill development workshops on coding and robotics</li>
<li>IoT and AI training sessions</li>
<li>Industry expert guest lectures</li>
</ul>

<p><strong>Student Clubs:</strong></p>
<ul>
<li>Photography Club for event coverage and creative projects</li>
<li>Robotics Club for building and testing robots</li>
<li>Various department-specific technical clubs</li>
</ul>"#;

const CONTACT_HTML: &str = r#"<h3>📍 MITK Contact Information</h3>

<p><strong>Address:</strong></p>
<p>Moodlakatte Institute of Technology, Kundapura (MITK)<br>
Moodlakatte, Near Kundapura Railway Station<br>
Udupi District, Karnataka - 576217</p>

<p><strong>Contact Details:</strong></p>
<ul>
<li>Phone: +91-8254-237630</li>
<li>Email: info@mitkundapura.com</li>
<li>Website: <a href="https://www.mitkundapura.com" target="_blank">www.mitkundapura.com</a></li>
</ul>

<p><strong>Transportation:</strong></p>
<ul>
<li>Nearest Railway Station: Kundapura Railway Station</li>
<li>Nearest Bus Stop: Kundapura Bus Stand</li>
<li>College bus services available from various routes in Udupi and Kundapura</li>
</ul>

<p><strong>Established:</strong> 2004<br>
<strong>Affiliation:</strong> Visvesvaraya Technological University (VTU), Belagavi<br>
<strong>Approvals:</strong> AICTE, Government of Karnataka</p>"#;

const OVERVIEW_HTML: &str = r#"<h3>🤖 MITK AI Assistant</h3>

<p>I'm here to help you with information about Moodlakatte Institute of Technology, Kundapura (MITK).</p>

<p><strong>I can provide information about:</strong></p>
<ul>
<li>Admission process and eligibility criteria</li>
<li>Academic programs (BE and MBA courses)</li>
<li>Campus facilities and infrastructure</li>
<li>Placement services and career opportunities</li>
<li>Events, activities, and student clubs</li>
<li>Contact information and location details</li>
</ul>

<p><strong>Quick Contact:</strong></p>
<ul>
<li>Phone: +91-8254-237630</li>
<li>Email: info@mitkundapura.com</li>
<li>Website: <a href="https://www.mitkundapura.com" target="_blank">www.mitkundapura.com</a></li>
</ul>

<p>Please feel free to ask me anything about MITK!</p>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_question() {
        let response = resolve("What is the eligibility for admission?");
        assert!(response.text.contains("Eligibility"));
        assert_eq!(response.confidence, 92);
        assert!(response.sources.iter().any(|s| s == KNOWLEDGE_BASE_LABEL));
        assert_eq!(response.model, None);
    }

    #[test]
    fn test_admission_substring_always_wins() {
        for message in [
            "ADMISSION",
            "admissions for MBA course",
            "placement after admission?",
            "campus hostel admission email",
            "preadmissionx",
        ] {
            assert_eq!(classify(message), Category::Admissions, "message: {}", message);
            assert_eq!(resolve(message).confidence, 92);
        }
    }

    #[test]
    fn test_category_order_breaks_ties() {
        // course beats placement
        assert_eq!(classify("which course has the best placement"), Category::Courses);
        // campus beats events
        assert_eq!(classify("campus fest dates"), Category::Campus);
        // placement beats contact
        assert_eq!(classify("placement cell phone number"), Category::Placements);
        // events beats contact
        assert_eq!(classify("club contact"), Category::Events);
    }

    #[test]
    fn test_each_category_is_reachable() {
        let cases = [
            ("How do I apply?", Category::Admissions, 92),
            ("Tell me about the MBA", Category::Courses, 94),
            ("Is there a hostel?", Category::Campus, 91),
            ("Which company recruits here?", Category::Placements, 89),
            ("Any cultural festivals?", Category::Events, 88),
            ("What is the address?", Category::Contact, 96),
            ("Hello there", Category::Overview, 85),
        ];
        for (message, category, confidence) in cases {
            assert_eq!(classify(message), category, "message: {}", message);
            let response = resolve(message);
            assert_eq!(response.confidence, confidence);
            assert_eq!(response.sources[0], category.source());
            assert_eq!(response.sources[1], KNOWLEDGE_BASE_LABEL);
        }
    }

    #[test]
    fn test_short_words_match_whole_words_only() {
        assert_eq!(classify("What BE branches exist"), Category::Courses);
        assert_eq!(classify("mba?"), Category::Courses);
        // "be" inside other words does not route to courses
        assert_eq!(classify("best time to visit"), Category::Overview);
        assert_eq!(classify("number please"), Category::Overview);
    }

    #[test]
    fn test_default_overview() {
        let response = resolve("");
        assert_eq!(response.confidence, 85);
        assert_eq!(
            response.sources,
            vec![ASSISTANT_LABEL.to_string(), KNOWLEDGE_BASE_LABEL.to_string()]
        );
        assert!(response.text.contains("I can provide information about"));
    }
}
