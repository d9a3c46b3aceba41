//! The profile record shipped with the crate.

use super::{
    Award, Certification, Education, Experience, Personal, Profile, Project, Publication,
    SkillCategory,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn profile() -> Profile {
    Profile {
        personal: Personal {
            name: "Raju Yallappa".to_string(),
            location: "USA (Open to Relocation)".to_string(),
            email: "rajuyallappa9056@gmail.com".to_string(),
            phone: "316259xxxx".to_string(),
            linkedin: "https://www.linkedin.com/in/raju-yallappa".to_string(),
            github: "https://github.com/raju9056".to_string(),
            available_for_work: true,
        },
        summary: "Data & Cloud Engineer with 6+ years of experience designing, developing, and \
                  optimizing scalable, data-driven solutions in cloud environments. Strong \
                  expertise in Azure (Data Factory, Databricks, EventHub, ADLS, Functions), AWS, \
                  and SQL-based analytics. Proven record implementing ETL/ELT pipelines, data \
                  lakes, and real-time streaming systems to enable actionable insights. \
                  Experienced in Python, Spark, and DevOps (Azure DevOps, GitLab CI/CD) with \
                  focus on data quality, governance, and operational excellence."
            .to_string(),
        skill_categories: vec![
            SkillCategory {
                category: "Languages".to_string(),
                items: strings(&[
                    "Python",
                    "SQL",
                    "Java",
                    "Scala (familiar)",
                    "JavaScript (ES6)",
                ]),
            },
            SkillCategory {
                category: "Cloud & Data Platforms".to_string(),
                items: strings(&[
                    "Azure (ADF, Databricks, EventHub, ADLS, Functions, Blob Storage, Power BI)",
                    "AWS (S3, Lambda, ECS, Redshift)",
                ]),
            },
            SkillCategory {
                category: "Data Engineering & Analytics".to_string(),
                items: strings(&[
                    "ETL/ELT pipelines",
                    "Data Warehousing",
                    "Data Lake Architecture",
                    "Snowflake",
                    "PostgreSQL",
                    "MongoDB",
                    "Cassandra",
                ]),
            },
            SkillCategory {
                category: "Tools & Frameworks".to_string(),
                items: strings(&[
                    "Spark",
                    "Kafka",
                    "FastAPI",
                    "Flask",
                    "Spring Boot",
                    "Terraform",
                    "GitHub Actions",
                    "Jenkins",
                    "Azure DevOps",
                ]),
            },
            SkillCategory {
                category: "DevOps & Observability".to_string(),
                items: strings(&["Kubernetes", "Docker", "Prometheus", "Grafana", "CloudWatch"]),
            },
            SkillCategory {
                category: "BI & Visualization".to_string(),
                items: strings(&["Power BI", "Tableau", "Grafana"]),
            },
            SkillCategory {
                category: "Frontend (Familiar)".to_string(),
                items: strings(&[
                    "React",
                    "Redux",
                    "TypeScript",
                    "HTML5",
                    "CSS3",
                    "Tailwind CSS",
                ]),
            },
            SkillCategory {
                category: "Security & Governance".to_string(),
                items: strings(&[
                    "IAM",
                    "RBAC",
                    "KMS",
                    "Data Privacy (Informatica, Axon, EDC - familiar)",
                ]),
            },
            SkillCategory {
                category: "Methodologies".to_string(),
                items: strings(&["Agile", "DevOps", "CI/CD", "Test-Driven Development"]),
            },
        ],
        experience: vec![
            Experience {
                company: "AbbVie".to_string(),
                location: "San Francisco, CA, USA".to_string(),
                role: "Full Stack Developer".to_string(),
                period: "06/2022 - present".to_string(),
                current: true,
                highlights: strings(&[
                    "Designed and implemented data ingestion and transformation pipelines using \
                     Azure Data Factory, Databricks, and Python, enabling analytics for \
                     multimodal datasets (image, text, sensor data).",
                    "Built streaming data workflows with Kafka, EventHub, and AWS Lambda, \
                     achieving sub-second ingestion latency and 99.9% availability.",
                    "Migrated legacy pipelines to Azure Data Lake Storage (ADLS) and Kubernetes \
                     microservices, improving scalability and governance compliance.",
                    "Developed monitoring dashboards (Grafana, Prometheus) for ETL performance \
                     and data quality metrics, reducing incident resolution time by 35%.",
                    "Implemented CI/CD pipelines using Azure DevOps, automating testing, \
                     deployment, and infrastructure provisioning.",
                    "Partnered with data governance and product teams to ensure secure data \
                     sharing, privacy, and compliance across analytics environments.",
                    "Mentored junior engineers in best practices for data modeling, Spark \
                     optimization, and DevOps automation.",
                ]),
                technologies: strings(&[
                    "Azure Data Factory",
                    "Databricks",
                    "Python",
                    "Kafka",
                    "EventHub",
                    "AWS Lambda",
                    "ADLS",
                    "Kubernetes",
                    "Grafana",
                    "Prometheus",
                    "Azure DevOps",
                ]),
            },
            Experience {
                company: "Wichita State University".to_string(),
                location: "Wichita, KS, USA".to_string(),
                role: "Graduate Research Assistant".to_string(),
                period: "08/2021 - 05/2022".to_string(),
                current: false,
                highlights: strings(&[
                    "Engineered distributed data processing pipelines on Azure HPC clusters for \
                     AI-based data extraction, improving GPU utilization by 20%.",
                    "Implemented REST APIs and Python-based microservices for serving ML-based \
                     analytics via Flask and FastAPI.",
                    "Managed structured and unstructured datasets in PostgreSQL and DynamoDB, \
                     supporting 1M+ curated records.",
                    "Automated dataset validation pipelines, enhancing curation efficiency and \
                     reducing manual processing by 40%.",
                ]),
                technologies: strings(&[
                    "Azure HPC",
                    "Python",
                    "Flask",
                    "FastAPI",
                    "PostgreSQL",
                    "DynamoDB",
                ]),
            },
            Experience {
                company: "Rakuten".to_string(),
                location: "Bangalore, India".to_string(),
                role: "Associate Software Developer".to_string(),
                period: "01/2020 - 01/2021".to_string(),
                current: false,
                highlights: strings(&[
                    "Developed real-time data streaming solutions using Kafka, Flask, and AWS \
                     Lambda for payment analytics platforms.",
                    "Automated ETL workflows for high-volume transactional datasets using \
                     Python, SQL, and AWS Glue/S3, increasing ingestion reliability by 40% and \
                     reducing manual pipeline maintenance by 60%.",
                    "Containerized applications with Docker and orchestrated with Kubernetes, \
                     reducing deployment time by 50%.",
                    "Improved system observability and proactive alerting through custom \
                     Grafana dashboards and telemetry integration.",
                ]),
                technologies: strings(&[
                    "Kafka",
                    "Flask",
                    "AWS Lambda",
                    "Python",
                    "SQL",
                    "AWS Glue",
                    "S3",
                    "Docker",
                    "Kubernetes",
                    "Grafana",
                ]),
            },
        ],
        projects: vec![
            Project {
                name: "AI-Powered Data Analyst Agent".to_string(),
                description: "Built an intelligent agent that connects to live databases and \
                              supports uploading local files. It interprets user questions, \
                              generates SQL queries, and returns real-time insights with \
                              visualizations."
                    .to_string(),
                github: Some(
                    "https://github.com/raju9056/data-analysis/blob/main/data-analyst.py"
                        .to_string(),
                ),
                website: None,
                tags: strings(&["Python", "PostgreSQL", "Pandas", "LLM"]),
                featured: true,
            },
            Project {
                name: "LLM Fine-Tuning for Ecommerce Data Extraction".to_string(),
                description: "Used 4-bit quantization and Unsloth for memory-efficient training \
                              and deployed in GGUF format for lightweight inference."
                    .to_string(),
                github: Some("https://github.com/raju9056/fine-tuning".to_string()),
                website: None,
                tags: strings(&["Python", "HuggingFace", "Unsloth", "LoRA"]),
                featured: true,
            },
            Project {
                name: "CyberSenseAI".to_string(),
                description: "Built a web security analysis tool that scans websites, captures \
                              client-side data (cookies, localStorage, JS errors), and uses GPT \
                              to generate AI-driven risk summaries and security scores."
                    .to_string(),
                github: None,
                website: Some("https://d4nxx94in9m6e.cloudfront.net/".to_string()),
                tags: strings(&["ReactJS", "OpenAI", "Puppeteer", "NodeJS"]),
                featured: true,
            },
            Project {
                name: "COVID-19 Tracker".to_string(),
                description: "Created an interactive dashboard to monitor global COVID-19 \
                              trends using real-time API data, user authentication, and \
                              Firestore for dynamic storage."
                    .to_string(),
                github: None,
                website: Some("https://covid-19-tracker-9056.web.app/".to_string()),
                tags: strings(&["ReactJS", "Firebase", "SQL", "HTML5", "CSS3"]),
                featured: true,
            },
            Project {
                name: "Twitter Research Tools".to_string(),
                description: "Developed tools to analyze Twitter data and detect trends using \
                              supervised ML models, with visualizations and accuracy \
                              comparisons between classifiers."
                    .to_string(),
                github: Some("https://github.com/raju9056/twitter-research-tools".to_string()),
                website: None,
                tags: strings(&["Python", "Matplotlib", "SVM", "Pandas", "KNeighbors Classifier"]),
                featured: true,
            },
        ],
        education: vec![
            Education {
                institution: "Wichita State University".to_string(),
                location: "Wichita, KS, USA".to_string(),
                degree: "Master's in Computer Science".to_string(),
                period: "01/2021 - 05/2022".to_string(),
            },
            Education {
                institution: "Reva University".to_string(),
                location: "Bangalore, KA, IN".to_string(),
                degree: "Bachelor of Engineering in Computer Science & Engineering".to_string(),
                period: "08/2016 - 05/2020".to_string(),
            },
        ],
        publications: vec![
            Publication {
                title: "Building Scalable RAG Knowledge Base".to_string(),
                url: "https://medium.com/@rajuyallappa9056/why-your-rag-sucks-fixing-broken-retrieval-with-hybrid-search-reranking-contextual-chunking-336d47a8e7c0".to_string(),
                kind: "article".to_string(),
            },
            Publication {
                title: "Want an AI Data Analyst on Your Team? Here's How to Build One".to_string(),
                url: "https://medium.com/@rajuyallappa9056/from-question-to-insight-automating-sql-python-analysis-with-llms-c8326c0e2f3d".to_string(),
                kind: "article".to_string(),
            },
            Publication {
                title: "Opinion mining of twitter data using machine learning".to_string(),
                url: "https://web.p.ebscohost.com/abstract?site=ehost&scope=site&jrnl=09765697&AN=143484189".to_string(),
                kind: "paper".to_string(),
            },
        ],
        awards: vec![
            Award {
                company: "Rakuten India".to_string(),
                description: "SPOT award for excellence".to_string(),
            },
            Award {
                company: "AbbVie".to_string(),
                description: "Received 6 corporate awards for exceptional performance, teamwork \
                              and excellence from 2023-2025"
                    .to_string(),
            },
        ],
        certifications: vec![
            Certification {
                name: "AWS Cloud Practitioner certification".to_string(),
            },
            Certification {
                name: "Generative AI: Introduction to LLMs".to_string(),
            },
            Certification {
                name: "Modern React with Redux certification".to_string(),
            },
            Certification {
                name: "Learning Amazon Web Services Lambda".to_string(),
            },
            Certification {
                name: "Learning Azure DevOps".to_string(),
            },
            Certification {
                name: "React Hooks".to_string(),
            },
        ],
    }
}
