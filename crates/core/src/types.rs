use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post in the embedded catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    /// Markdown body
    pub content: String,
    /// Publication date, formatted `YYYY-MM-DD`
    pub date: String,
    /// Human readable reading time, e.g. "8 min read"
    pub read_time: String,
    pub category: String,
    pub slug: String,
    pub author: String,
    pub tags: Vec<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u32>,
}

impl BlogPost {
    /// Parsed publication date, `None` when the date string is malformed
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Minutes of reading time taken from the leading number of `read_time`.
    ///
    /// Anything unparseable counts as zero.
    pub fn read_time_minutes(&self) -> u32 {
        parse_leading_number(&self.read_time)
    }

    /// All textual fields joined by spaces, in the order searched
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = vec![
            self.title.as_str(),
            self.excerpt.as_str(),
            self.content.as_str(),
            self.author.as_str(),
        ];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.push(self.category.as_str());
        parts.join(" ")
    }

    /// Publication date for display ("January 15, 2024"), falling back to the raw string
    pub fn display_date(&self) -> String {
        self.published_on()
            .map(|d| d.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| self.date.clone())
    }

    pub fn path(&self) -> String {
        format!("/blog/{}/", self.slug)
    }
}

/// A portfolio project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub category: String,
    pub github: String,
    pub demo: String,
    pub color: String,
    pub features: Vec<String>,
    pub tech_details: TechDetails,
    pub metrics: Metrics,
    pub timeline: String,
    pub team_size: String,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
}

impl Project {
    pub fn search_text(&self) -> String {
        let mut parts: Vec<&str> = vec![
            self.title.as_str(),
            self.description.as_str(),
            self.long_description.as_str(),
        ];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.push(self.category.as_str());
        parts.join(" ")
    }

    /// Anchor id used on the home page
    pub fn anchor(&self) -> String {
        slugify(&self.title)
    }
}

/// Stack breakdown of a project
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TechDetails {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub deployment: Vec<String>,
}

/// Self-assessed project scores, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub performance: u8,
    pub security: u8,
    pub scalability: u8,
    pub maintainability: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency 0-100
    pub level: u8,
    pub color: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub color: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub title: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub href: String,
}

/// Get a URL-safe slug from arbitrary text
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_dash = true;
    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Leading digits of a string such as "8 min read" or "8min"; zero if absent
pub fn parse_leading_number(s: &str) -> u32 {
    let s = s.trim_start();
    let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..digits].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(date: &str, read_time: &str) -> BlogPost {
        BlogPost {
            id: 1,
            title: "Title".into(),
            excerpt: "Excerpt".into(),
            content: "Body".into(),
            date: date.into(),
            read_time: read_time.into(),
            category: "React".into(),
            slug: "title".into(),
            author: "Author".into(),
            tags: vec!["One".into(), "Two".into()],
            featured: false,
            image: None,
            likes: None,
            comments: None,
        }
    }

    #[test]
    fn test_read_time_minutes() {
        assert_eq!(post("2024-01-01", "8 min read").read_time_minutes(), 8);
        assert_eq!(post("2024-01-01", "12 min read").read_time_minutes(), 12);
        assert_eq!(post("2024-01-01", "quick read").read_time_minutes(), 0);
        assert_eq!(post("2024-01-01", "").read_time_minutes(), 0);
        assert_eq!(post("2024-01-01", "-3 min").read_time_minutes(), 0);
        assert_eq!(post("2024-01-01", "8min read").read_time_minutes(), 8);
        assert_eq!(post("2024-01-01", "10-min read").read_time_minutes(), 10);
        assert_eq!(post("2024-01-01", " 5 min").read_time_minutes(), 5);
    }

    #[test]
    fn test_published_on_soft_fails() {
        assert_eq!(
            post("2024-01-15", "1 min").published_on(),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(post("15/01/2024", "1 min").published_on(), None);
    }

    #[test]
    fn test_display_date() {
        assert_eq!(post("2024-01-05", "1 min").display_date(), "January 5, 2024");
        assert_eq!(post("someday", "1 min").display_date(), "someday");
    }

    #[test]
    fn test_search_text_field_order() {
        assert_eq!(
            post("2024-01-01", "1 min").search_text(),
            "Title Excerpt Body Author One Two React"
        );
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Web Development"), "web-development");
        assert_eq!(slugify("Next.js"), "next-js");
        assert_eq!(slugify("  Full   Stack  "), "full-stack");
        assert_eq!(slugify("E-Commerce Platform"), "e-commerce-platform");
        assert_eq!(slugify("CSS"), "css");
        assert_eq!(slugify("!!!"), "");
    }
}
