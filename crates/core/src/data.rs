//! Literal site content.
//!
//! Everything the site shows lives here; there is no other content source.

use crate::types::*;

pub const AUTHOR: &str = "Ezedin";

pub const POST_CATEGORIES: &[&str] = &[
    "All",
    "React",
    "Web Development",
    "TypeScript",
    "Next.js",
    "CSS",
    "Backend",
    "JavaScript",
    "DevOps",
];

pub const PROJECT_CATEGORIES: &[&str] = &["All", "Full Stack", "Frontend", "Backend", "Mobile"];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: u32,
    title: &str,
    excerpt: &str,
    content: &str,
    date: &str,
    read_time: &str,
    category: &str,
    slug: &str,
    tags: &[&str],
    featured: bool,
    image: &str,
    engagement: Option<(u32, u32)>,
) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.trim().to_string(),
        date: date.to_string(),
        read_time: read_time.to_string(),
        category: category.to_string(),
        slug: slug.to_string(),
        author: AUTHOR.to_string(),
        tags: strings(tags),
        featured,
        image: Some(image.to_string()),
        likes: engagement.map(|(likes, _)| likes),
        comments: engagement.map(|(_, comments)| comments),
    }
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        post(
            1,
            "Building Scalable React Applications",
            "Learn the best practices for building large-scale React applications that can grow with your team and requirements.",
            SCALABLE_REACT,
            "2024-01-15",
            "8 min read",
            "React",
            "building-scalable-react-applications",
            &["React", "Architecture", "Best Practices", "Scalability"],
            true,
            "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=400&fit=crop",
            Some((42, 8)),
        ),
        post(
            2,
            "The Future of Web Development",
            "Exploring emerging trends and technologies that are shaping the future of web development in 2024 and beyond.",
            FUTURE_OF_WEB,
            "2024-01-10",
            "6 min read",
            "Web Development",
            "future-of-web-development",
            &["Trends", "Future", "Technology", "Innovation"],
            true,
            "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=800&h=400&fit=crop",
            Some((35, 12)),
        ),
        post(
            3,
            "TypeScript Best Practices",
            "A comprehensive guide to writing better TypeScript code with practical examples and real-world scenarios.",
            TYPESCRIPT_PRACTICES,
            "2024-01-05",
            "10 min read",
            "TypeScript",
            "typescript-best-practices",
            &["TypeScript", "Best Practices", "JavaScript", "Types"],
            false,
            "https://images.unsplash.com/photo-1516116216624-53e697fedbea?w=800&h=400&fit=crop",
            Some((28, 6)),
        ),
        post(
            4,
            "Optimizing Next.js Performance",
            "Tips and techniques for improving the performance of your Next.js applications for better user experience.",
            NEXTJS_PERFORMANCE,
            "2023-12-28",
            "7 min read",
            "Next.js",
            "optimizing-nextjs-performance",
            &["Next.js", "Performance", "Optimization", "React"],
            false,
            "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=800&h=400&fit=crop",
            Some((31, 9)),
        ),
        post(
            5,
            "Modern CSS Techniques",
            "Discover the latest CSS features and techniques that will revolutionize your styling workflow.",
            "# Modern CSS Techniques\n\nDiscover the latest CSS features and techniques...",
            "2023-12-20",
            "5 min read",
            "CSS",
            "modern-css-techniques",
            &["CSS", "Styling", "Modern", "Techniques"],
            false,
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=800&h=400&fit=crop",
            None,
        ),
        post(
            6,
            "API Design Principles",
            "Essential principles for designing robust and developer-friendly APIs that scale.",
            "# API Design Principles\n\nEssential principles for designing robust APIs...",
            "2023-12-15",
            "9 min read",
            "Backend",
            "api-design-principles",
            &["API", "Backend", "Design", "REST"],
            true,
            "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=800&h=400&fit=crop",
            None,
        ),
        post(
            7,
            "JavaScript Performance Tips",
            "Practical tips for optimizing JavaScript performance in modern web applications.",
            "# JavaScript Performance Tips\n\nPractical tips for optimizing JavaScript performance...",
            "2023-12-10",
            "6 min read",
            "JavaScript",
            "javascript-performance-tips",
            &["JavaScript", "Performance", "Optimization", "Tips"],
            false,
            "https://images.unsplash.com/photo-1579468118864-1b9ea3c0db4a?w=800&h=400&fit=crop",
            None,
        ),
        post(
            8,
            "Docker for Developers",
            "A practical guide to using Docker in your development workflow for better consistency and deployment.",
            "# Docker for Developers\n\nA practical guide to using Docker in development...",
            "2023-12-05",
            "12 min read",
            "DevOps",
            "docker-for-developers",
            &["Docker", "DevOps", "Containers", "Development"],
            false,
            "https://images.unsplash.com/photo-1605745341112-85968b19335a?w=800&h=400&fit=crop",
            None,
        ),
    ]
}

const SCALABLE_REACT: &str = r#"
# Building Scalable React Applications

Building scalable React applications is crucial for long-term success. Here are the key principles I follow:

## Component Architecture

When building large React applications, component architecture is fundamental. I recommend:

- **Single Responsibility Principle**: Each component should have one clear purpose
- **Composition over Inheritance**: Use composition to build complex UIs
- **Container vs Presentational Components**: Separate logic from presentation

## State Management

For state management in scalable applications:

- Use React Context for global state that doesn't change frequently
- Consider Redux Toolkit for complex state logic
- Keep local state when possible to avoid unnecessary complexity

## Code Organization

Structure your project for maintainability:

```
src/
  components/
    common/
    features/
  hooks/
  utils/
  types/
```

## Performance Optimization

Key performance strategies:

- Use React.memo for expensive components
- Implement code splitting with React.lazy
- Optimize bundle size with tree shaking
- Use useMemo and useCallback judiciously

## Testing Strategy

A robust testing strategy includes:

- Unit tests for utility functions
- Component tests with React Testing Library
- Integration tests for user workflows
- E2E tests for critical paths

## Conclusion

Building scalable React applications requires thoughtful architecture, proper state management, and a focus on performance. These principles have served me well in building maintainable applications.
"#;

const FUTURE_OF_WEB: &str = r#"
# The Future of Web Development

The web development landscape is evolving rapidly. Here are the trends I'm watching:

## Edge Computing

Edge computing is revolutionizing how we think about web applications:

- Reduced latency by processing closer to users
- Better performance for global applications
- New deployment strategies and architectures

## WebAssembly (WASM)

WebAssembly is opening new possibilities:

- Near-native performance in the browser
- Language diversity beyond JavaScript
- Complex applications running in browsers

## AI Integration

AI is becoming integral to web development:

- AI-powered code completion and generation
- Intelligent user interfaces
- Automated testing and optimization

## Conclusion

The future of web development is exciting, with new technologies enabling better user experiences and developer productivity.
"#;

const TYPESCRIPT_PRACTICES: &str = r#"
# TypeScript Best Practices

A comprehensive guide to writing better TypeScript code with practical examples and real-world scenarios.

## Type Definitions

Always prefer explicit type definitions:

```typescript
interface User {
  id: string
  name: string
  email: string
}
```

## Utility Types

Leverage TypeScript's utility types:

- `Partial<T>` for optional properties
- `Pick<T, K>` for selecting specific properties
- `Omit<T, K>` for excluding properties

## Conclusion

These practices will help you write more maintainable TypeScript code.
"#;

const NEXTJS_PERFORMANCE: &str = r#"
# Optimizing Next.js Performance

Tips and techniques for improving the performance of your Next.js applications.

## Image Optimization

Use Next.js Image component for automatic optimization:

```jsx
import Image from 'next/image'

<Image
  src="/hero.jpg"
  alt="Hero"
  width={800}
  height={400}
  priority
/>
```

## Code Splitting

Implement dynamic imports for better bundle splitting:

```jsx
const DynamicComponent = dynamic(() => import('./Component'))
```

## Conclusion

These optimizations will significantly improve your Next.js app performance.
"#;

struct ProjectSeed<'a> {
    title: &'a str,
    description: &'a str,
    long_description: &'a str,
    image: &'a str,
    tags: &'a [&'a str],
    category: &'a str,
    repo: &'a str,
    demo: &'a str,
    color: &'a str,
    features: &'a [&'a str],
    stack: [&'a [&'a str]; 4],
    metrics: [u8; 4],
    timeline: &'a str,
    team_size: &'a str,
    challenges: &'a [&'a str],
    solutions: &'a [&'a str],
}

impl ProjectSeed<'_> {
    fn build(self) -> Project {
        let [frontend, backend, database, deployment] = self.stack;
        let [performance, security, scalability, maintainability] = self.metrics;
        Project {
            title: self.title.to_string(),
            description: self.description.to_string(),
            long_description: self.long_description.to_string(),
            image: self.image.to_string(),
            tags: strings(self.tags),
            category: self.category.to_string(),
            github: format!("https://github.com/ezedin/{}", self.repo),
            demo: self.demo.to_string(),
            color: self.color.to_string(),
            features: strings(self.features),
            tech_details: TechDetails {
                frontend: strings(frontend),
                backend: strings(backend),
                database: strings(database),
                deployment: strings(deployment),
            },
            metrics: Metrics {
                performance,
                security,
                scalability,
                maintainability,
            },
            timeline: self.timeline.to_string(),
            team_size: self.team_size.to_string(),
            challenges: strings(self.challenges),
            solutions: strings(self.solutions),
        }
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        ProjectSeed {
            title: "E-Commerce Platform",
            description: "A full-stack e-commerce solution with React, Node.js, and PostgreSQL featuring real-time inventory management.",
            long_description: "A comprehensive e-commerce platform built from the ground up with modern technologies. Features include real-time inventory management, secure payment processing, advanced search and filtering, user authentication, order tracking, and an admin dashboard for managing products and orders.",
            image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=500&h=300&fit=crop",
            tags: &["React", "Node.js", "PostgreSQL", "Stripe"],
            category: "Full Stack",
            repo: "ecommerce-platform",
            demo: "https://ecommerce-demo.com",
            color: "#22c55e",
            features: &[
                "Real-time inventory tracking",
                "Secure payment processing with Stripe",
                "Advanced product search and filtering",
                "User authentication and profiles",
                "Order tracking and history",
                "Admin dashboard for management",
                "Responsive design for all devices",
                "Email notifications for orders",
            ],
            stack: [
                &["React 18", "TypeScript", "Tailwind CSS", "Framer Motion"],
                &["Node.js", "Express.js", "JWT Authentication", "Bcrypt"],
                &["PostgreSQL", "Prisma ORM", "Redis Cache"],
                &["Docker", "AWS EC2", "Nginx", "PM2"],
            ],
            metrics: [95, 92, 88, 90],
            timeline: "4 months",
            team_size: "3 developers",
            challenges: &[
                "Implementing real-time inventory updates across multiple users",
                "Handling high-traffic during sales events",
                "Ensuring secure payment processing and data protection",
            ],
            solutions: &[
                "Used WebSocket connections and Redis pub/sub for real-time updates",
                "Implemented horizontal scaling with load balancers and caching strategies",
                "Integrated Stripe for PCI-compliant payments and implemented comprehensive security measures",
            ],
        }
        .build(),
        ProjectSeed {
            title: "Task Management App",
            description: "A collaborative task management application with real-time updates, built with Next.js and Socket.io.",
            long_description: "A modern task management application designed for team collaboration. Features real-time updates, drag-and-drop functionality, project boards, team member assignments, deadline tracking, and comprehensive reporting. Built with performance and user experience as top priorities.",
            image: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=500&h=300&fit=crop",
            tags: &["Next.js", "Socket.io", "MongoDB", "TypeScript"],
            category: "Frontend",
            repo: "task-manager",
            demo: "https://taskmanager-demo.com",
            color: "#06b6d4",
            features: &[
                "Real-time collaborative editing",
                "Drag-and-drop task management",
                "Project boards and workflows",
                "Team member assignments",
                "Deadline tracking and notifications",
                "Time tracking and reporting",
                "File attachments and comments",
                "Mobile-responsive design",
            ],
            stack: [
                &["Next.js 14", "React 18", "TypeScript", "Tailwind CSS", "Framer Motion"],
                &["Node.js", "Socket.io", "Express.js", "JWT"],
                &["MongoDB", "Mongoose", "Redis"],
                &["Vercel", "MongoDB Atlas", "CloudFlare"],
            ],
            metrics: [93, 89, 91, 94],
            timeline: "3 months",
            team_size: "2 developers",
            challenges: &[
                "Implementing real-time collaboration without conflicts",
                "Optimizing performance with large datasets",
                "Creating intuitive drag-and-drop interfaces",
            ],
            solutions: &[
                "Used operational transformation algorithms for conflict resolution",
                "Implemented virtual scrolling and pagination for large lists",
                "Built custom drag-and-drop components with smooth animations",
            ],
        }
        .build(),
        ProjectSeed {
            title: "Weather Analytics API",
            description: "RESTful API for weather data analytics with caching, rate limiting, and comprehensive documentation.",
            long_description: "A high-performance weather analytics API built with Python and FastAPI. Provides real-time weather data, historical analytics, forecasting capabilities, and comprehensive data visualization endpoints. Features advanced caching, rate limiting, and automatic API documentation.",
            image: "https://images.unsplash.com/photo-1504608524841-42fe6f032b4b?w=500&h=300&fit=crop",
            tags: &["Python", "FastAPI", "Redis", "Docker"],
            category: "Backend",
            repo: "weather-api",
            demo: "https://weather-api-docs.com",
            color: "#f59e0b",
            features: &[
                "Real-time weather data endpoints",
                "Historical weather analytics",
                "Weather forecasting algorithms",
                "Data visualization endpoints",
                "Advanced caching with Redis",
                "Rate limiting and throttling",
                "Automatic API documentation",
                "Comprehensive error handling",
            ],
            stack: [
                &["Swagger UI", "ReDoc", "HTML/CSS"],
                &["Python 3.11", "FastAPI", "Pydantic", "SQLAlchemy"],
                &["PostgreSQL", "Redis", "TimescaleDB"],
                &["Docker", "Kubernetes", "AWS EKS", "Prometheus"],
            ],
            metrics: [97, 94, 96, 92],
            timeline: "2 months",
            team_size: "1 developer",
            challenges: &[
                "Handling large volumes of weather data efficiently",
                "Implementing accurate forecasting algorithms",
                "Ensuring high availability and low latency",
            ],
            solutions: &[
                "Used TimescaleDB for efficient time-series data storage",
                "Implemented machine learning models for weather prediction",
                "Set up distributed caching and load balancing",
            ],
        }
        .build(),
        ProjectSeed {
            title: "Mobile Fitness Tracker",
            description: "Cross-platform mobile app for fitness tracking with workout plans and progress visualization.",
            long_description: "A comprehensive fitness tracking mobile application built with React Native. Features workout planning, progress tracking, social features, nutrition logging, and AI-powered recommendations. Designed with a focus on user engagement and motivation.",
            image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=500&h=300&fit=crop",
            tags: &["React Native", "Firebase", "Charts.js"],
            category: "Mobile",
            repo: "fitness-tracker",
            demo: "https://fitness-app-demo.com",
            color: "#ef4444",
            features: &[
                "Workout planning and tracking",
                "Progress visualization and analytics",
                "Social features and challenges",
                "Nutrition logging and analysis",
                "AI-powered workout recommendations",
                "Wearable device integration",
                "Offline mode support",
                "Push notifications and reminders",
            ],
            stack: [
                &["React Native", "TypeScript", "React Navigation", "React Native Reanimated"],
                &["Firebase Functions", "Node.js", "Express.js"],
                &["Firebase Firestore", "Firebase Storage"],
                &["App Store", "Google Play", "Firebase Hosting"],
            ],
            metrics: [91, 87, 89, 88],
            timeline: "5 months",
            team_size: "2 developers",
            challenges: &[
                "Creating smooth animations on mobile devices",
                "Integrating with various fitness wearables",
                "Handling offline data synchronization",
            ],
            solutions: &[
                "Used React Native Reanimated for 60fps animations",
                "Built universal adapters for different wearable APIs",
                "Implemented robust offline-first architecture with sync queues",
            ],
        }
        .build(),
        ProjectSeed {
            title: "AI Content Generator",
            description: "Web application that generates content using AI, with user authentication and subscription management.",
            long_description: "An AI-powered content generation platform that helps users create high-quality written content. Features multiple AI models, content templates, collaboration tools, and subscription management. Built with scalability and user experience in mind.",
            image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=500&h=300&fit=crop",
            tags: &["React", "OpenAI", "Stripe", "Auth0"],
            category: "Full Stack",
            repo: "ai-content-generator",
            demo: "https://ai-content-demo.com",
            color: "#8b5cf6",
            features: &[
                "Multiple AI model integration",
                "Content templates and workflows",
                "Real-time collaboration tools",
                "Version control and history",
                "Subscription and billing management",
                "Content optimization suggestions",
                "Export to multiple formats",
                "Team workspace management",
            ],
            stack: [
                &["React 18", "TypeScript", "Tailwind CSS", "Zustand"],
                &["Node.js", "Express.js", "OpenAI API", "Stripe API"],
                &["MongoDB", "Redis", "AWS S3"],
                &["AWS EC2", "Docker", "Nginx", "CloudFlare"],
            ],
            metrics: [89, 95, 92, 91],
            timeline: "6 months",
            team_size: "4 developers",
            challenges: &[
                "Managing AI API costs and rate limits",
                "Implementing secure user authentication",
                "Creating intuitive content editing interfaces",
            ],
            solutions: &[
                "Built intelligent caching and request optimization",
                "Integrated Auth0 for enterprise-grade security",
                "Developed custom rich text editor with AI integration",
            ],
        }
        .build(),
        ProjectSeed {
            title: "DevOps Dashboard",
            description: "Monitoring dashboard for DevOps teams with real-time metrics and alerting system.",
            long_description: "A comprehensive DevOps monitoring dashboard designed for development teams. Provides real-time metrics, alerting, deployment tracking, and performance analytics. Built with modern web technologies and designed for scalability.",
            image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=500&h=300&fit=crop",
            tags: &["Vue.js", "Docker", "Prometheus", "Grafana"],
            category: "Frontend",
            repo: "devops-dashboard",
            demo: "https://devops-demo.com",
            color: "#10b981",
            features: &[
                "Real-time system metrics monitoring",
                "Custom alerting and notifications",
                "Deployment tracking and rollback",
                "Performance analytics and insights",
                "Team collaboration tools",
                "Custom dashboard creation",
                "Integration with popular DevOps tools",
                "Mobile-responsive design",
            ],
            stack: [
                &["Vue.js 3", "TypeScript", "Vuetify", "Chart.js"],
                &["Node.js", "Express.js", "WebSocket", "Bull Queue"],
                &["InfluxDB", "Redis", "PostgreSQL"],
                &["Docker Swarm", "Traefik", "Prometheus", "Grafana"],
            ],
            metrics: [94, 91, 95, 89],
            timeline: "4 months",
            team_size: "3 developers",
            challenges: &[
                "Processing and visualizing large amounts of metrics data",
                "Creating responsive and interactive dashboards",
                "Implementing reliable alerting systems",
            ],
            solutions: &[
                "Optimized time-series data ingestion and querying with InfluxDB",
                "Built responsive, virtualized charts for high data density",
                "Implemented threshold-based alerting with webhooks and Slack integration",
            ],
        }
        .build(),
    ]
}

fn skill(name: &str, description: &str, level: u8, color: &str, technologies: &[&str]) -> Skill {
    Skill {
        name: name.to_string(),
        level,
        color: color.to_string(),
        description: description.to_string(),
        technologies: strings(technologies),
    }
}

pub fn skills() -> Vec<Skill> {
    vec![
        skill(
            "Frontend Development",
            "Building responsive and interactive user interfaces",
            95,
            "#22d3ee",
            &["React", "Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"],
        ),
        skill(
            "Backend Development",
            "Creating robust server-side applications and APIs",
            90,
            "#a855f7",
            &["Node.js", "Python", "Express.js", "FastAPI", "GraphQL"],
        ),
        skill(
            "Database Management",
            "Designing and optimizing database systems",
            85,
            "#f97316",
            &["PostgreSQL", "MongoDB", "Redis", "Prisma", "Mongoose"],
        ),
        skill(
            "Web Technologies",
            "Modern web standards and protocols",
            88,
            "#ec4899",
            &["REST APIs", "GraphQL", "WebSockets", "OAuth", "JWT"],
        ),
        skill(
            "Mobile Development",
            "Cross-platform mobile application development",
            80,
            "#ef4444",
            &["React Native", "Flutter", "Expo", "Firebase"],
        ),
        skill(
            "DevOps & Tools",
            "Deployment, monitoring, and development tools",
            82,
            "#14b8a6",
            &["Docker", "AWS", "Git", "CI/CD", "Kubernetes", "Nginx"],
        ),
    ]
}

pub fn stats() -> Vec<Stat> {
    [
        ("50+", "Projects Completed", "#22c55e", "Full-stack applications delivered"),
        ("5+", "Years Experience", "#3b82f6", "Professional development journey"),
        ("20+", "Happy Clients", "#f59e0b", "Satisfied customers worldwide"),
        ("1000+", "Cups of Coffee", "#8b5cf6", "Fuel for late-night coding sessions"),
        ("15+", "Technologies", "#ef4444", "Languages and frameworks mastered"),
        ("99%", "Uptime", "#06b6d4", "Reliable and consistent delivery"),
    ]
    .into_iter()
    .map(|(value, label, color, description)| Stat {
        value: value.to_string(),
        label: label.to_string(),
        color: color.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn experience() -> Vec<Experience> {
    [
        (
            "Senior Software Developer",
            "Tech Solutions Inc.",
            "2022 - Present",
            "Leading development of scalable web applications using modern technologies.",
        ),
        (
            "Full Stack Developer",
            "Digital Innovations",
            "2020 - 2022",
            "Built and maintained multiple client projects with focus on performance and UX.",
        ),
        (
            "Junior Developer",
            "StartupXYZ",
            "2019 - 2020",
            "Developed features for mobile and web applications in an agile environment.",
        ),
    ]
    .into_iter()
    .map(|(title, company, period, description)| Experience {
        title: title.to_string(),
        company: company.to_string(),
        period: period.to_string(),
        description: description.to_string(),
    })
    .collect()
}

pub fn contact_info() -> Vec<ContactInfo> {
    vec![
        ContactInfo {
            title: "Email".to_string(),
            value: "ezedin.ebrahim@example.com".to_string(),
            href: Some("mailto:ezedin.ebrahim@example.com".to_string()),
        },
        ContactInfo {
            title: "Phone".to_string(),
            value: "+1 (555) 123-4567".to_string(),
            href: Some("tel:+15551234567".to_string()),
        },
        ContactInfo {
            title: "Location".to_string(),
            value: "San Francisco, CA".to_string(),
            href: None,
        },
    ]
}

pub fn navigation() -> Vec<NavItem> {
    [
        ("Home", "/#home"),
        ("About", "/#about"),
        ("Projects", "/#projects"),
        ("Blog", "/blog/"),
        ("Contact", "/#contact"),
    ]
    .into_iter()
    .map(|(name, href)| NavItem {
        name: name.to_string(),
        href: href.to_string(),
    })
    .collect()
}
