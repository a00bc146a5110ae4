// src/keys.rs

//! Canonical field keys used by the default wiring and processors.
//!
//! The engine treats keys as opaque strings; these constants only exist so
//! wiring and processors cannot drift apart through typos. Hosts are free to
//! register additional keys of their own.

pub const JOB_TITLE: &str = "job_title";
pub const ROLE_DESCRIPTION: &str = "role_description";
pub const JOB_LEVEL: &str = "job_level";
pub const CITY: &str = "city";
pub const INDUSTRY_EXPERIENCE: &str = "industry_experience";
pub const INDUSTRY_SECTOR: &str = "industry_sector";
pub const PARSED_DATA_RAW: &str = "parsed_data_raw";

pub const TASK_LIST: &str = "task_list";
pub const MUST_HAVE_SKILLS: &str = "must_have_skills";
pub const NICE_TO_HAVE_SKILLS: &str = "nice_to_have_skills";
pub const SALARY_RANGE: &str = "salary_range";

pub const REMOTE_WORK_POLICY: &str = "remote_work_policy";
pub const DESIRED_PUBLICATION_CHANNELS: &str = "desired_publication_channels";
pub const BONUS_SCHEME: &str = "bonus_scheme";
pub const COMMISSION_STRUCTURE: &str = "commission_structure";

pub const LANGUAGE_REQUIREMENTS: &str = "language_requirements";
pub const LANGUAGE_OF_AD: &str = "language_of_ad";
pub const TRANSLATION_REQUIRED: &str = "translation_required";
