//! Static string tables for the two supported languages.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Ko,
    En,
}

impl Language {
    pub fn strings(self) -> &'static Strings {
        match self {
            Self::Ko => &KO,
            Self::En => &EN,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Ko => "한국어",
            Self::En => "English",
        }
    }

    /// `2024년 1월` / `January 2024`
    pub fn month_title(self, date: NaiveDate) -> String {
        match self {
            Self::Ko => format!("{}년 {}월", date.year(), date.month()),
            Self::En => date.format("%B %Y").to_string(),
        }
    }

    /// `2024년 1월 15일` / `January 15, 2024`
    pub fn long_date(self, date: NaiveDate) -> String {
        match self {
            Self::Ko => format!("{}년 {}월 {}일", date.year(), date.month(), date.day()),
            Self::En => date.format("%B %-d, %Y").to_string(),
        }
    }

    /// `1월 15일` / `Jan 15`
    pub fn short_date(self, date: NaiveDate) -> String {
        match self {
            Self::Ko => format!("{}월 {}일", date.month(), date.day()),
            Self::En => date.format("%b %-d").to_string(),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Self::Ko),
            "en" | "english" => Ok(Self::En),
            other => Err(format!("unsupported language '{}' (expected ko or en)", other)),
        }
    }
}

/// Every user-visible string that is not a data label.
pub struct Strings {
    pub app_subtitle: &'static str,
    pub nav_main: &'static str,
    pub nav_dashboard: &'static str,
    pub nav_projects: &'static str,
    pub nav_team: &'static str,
    pub nav_calendar: &'static str,
    pub nav_settings: &'static str,
    pub sign_out: &'static str,
    pub weekdays: [&'static str; 7],

    pub dashboard_subtitle: &'static str,
    pub stat_total_projects: &'static str,
    pub stat_active_members: &'static str,
    pub stat_completed: &'static str,
    pub stat_progress: &'static str,
    pub stat_progress_hint: &'static str,
    pub in_progress_title: &'static str,
    pub recent_activity_title: &'static str,
    pub due_prefix: &'static str,

    pub projects_subtitle: &'static str,
    pub project_search: &'static str,
    pub filter_all: &'static str,
    pub priority_suffix: &'static str,
    pub progress: &'static str,
    pub people_suffix: &'static str,
    pub no_matching_projects: &'static str,

    pub team_subtitle: &'static str,
    pub member_search: &'static str,
    pub no_matching_members: &'static str,

    pub calendar_subtitle: &'static str,
    pub day_events_title: &'static str,
    pub month_events_title: &'static str,
    pub pick_a_date: &'static str,
    pub no_events_on_date: &'static str,
    pub more_suffix: &'static str,

    pub settings_subtitle: &'static str,
    pub profile_title: &'static str,
    pub display_name: &'static str,
    pub email: &'static str,
    pub email_locked: &'static str,
    pub notifications_title: &'static str,
    pub notify_email: &'static str,
    pub notify_push: &'static str,
    pub notify_project_updates: &'static str,
    pub notify_task_assignments: &'static str,
    pub notify_reminders: &'static str,
    pub appearance_title: &'static str,
    pub theme: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub theme_system: &'static str,
    pub language: &'static str,
    pub not_persisted: &'static str,

    pub auth_title: &'static str,
    pub auth_prompt: &'static str,
    pub not_found: &'static str,
    pub read_only: &'static str,
}

pub static KO: Strings = Strings {
    app_subtitle: "프로젝트 관리",
    nav_main: "메인",
    nav_dashboard: "대시보드",
    nav_projects: "프로젝트",
    nav_team: "팀",
    nav_calendar: "캘린더",
    nav_settings: "설정",
    sign_out: "로그아웃",
    weekdays: ["일", "월", "화", "수", "목", "금", "토"],

    dashboard_subtitle: "프로젝트 현황을 한눈에 확인하세요",
    stat_total_projects: "총 프로젝트",
    stat_active_members: "팀 멤버",
    stat_completed: "완료된 프로젝트",
    stat_progress: "진행률",
    stat_progress_hint: "평균 완성률",
    in_progress_title: "진행 중인 프로젝트",
    recent_activity_title: "최근 활동",
    due_prefix: "마감",

    projects_subtitle: "모든 프로젝트를 관리하고 추적하세요",
    project_search: "프로젝트 검색...",
    filter_all: "전체",
    priority_suffix: "우선순위",
    progress: "진행률",
    people_suffix: "명",
    no_matching_projects: "검색 조건에 맞는 프로젝트가 없습니다.",

    team_subtitle: "팀 멤버를 관리하고 조직도를 확인하세요",
    member_search: "멤버 검색...",
    no_matching_members: "검색 조건에 맞는 멤버가 없습니다.",

    calendar_subtitle: "프로젝트 일정과 이벤트를 관리하세요",
    day_events_title: "오늘의 이벤트",
    month_events_title: "이번 달 이벤트",
    pick_a_date: "캘린더에서 날짜를 선택하세요.",
    no_events_on_date: "이 날짜에 예정된 이벤트가 없습니다.",
    more_suffix: "more",

    settings_subtitle: "계정 및 애플리케이션 설정을 관리하세요",
    profile_title: "프로필 설정",
    display_name: "표시 이름",
    email: "이메일",
    email_locked: "이메일 주소는 변경할 수 없습니다.",
    notifications_title: "알림 설정",
    notify_email: "이메일 알림",
    notify_push: "푸시 알림",
    notify_project_updates: "프로젝트 업데이트",
    notify_task_assignments: "작업 할당",
    notify_reminders: "일정 알림",
    appearance_title: "외관 설정",
    theme: "테마",
    theme_light: "라이트",
    theme_dark: "다크",
    theme_system: "시스템",
    language: "언어",
    not_persisted: "변경사항은 이 세션에만 적용됩니다.",

    auth_title: "로그인",
    auth_prompt: "이메일을 입력하세요",
    not_found: "페이지를 찾을 수 없습니다",
    read_only: "읽기 전용 데이터입니다. 변경되지 않았습니다.",
};

pub static EN: Strings = Strings {
    app_subtitle: "Project management",
    nav_main: "Main",
    nav_dashboard: "Dashboard",
    nav_projects: "Projects",
    nav_team: "Team",
    nav_calendar: "Calendar",
    nav_settings: "Settings",
    sign_out: "Sign out",
    weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],

    dashboard_subtitle: "Your projects at a glance",
    stat_total_projects: "Total projects",
    stat_active_members: "Team members",
    stat_completed: "Completed projects",
    stat_progress: "Progress",
    stat_progress_hint: "Average completion",
    in_progress_title: "Projects in progress",
    recent_activity_title: "Recent activity",
    due_prefix: "Due",

    projects_subtitle: "Manage and track every project",
    project_search: "Search projects...",
    filter_all: "All",
    priority_suffix: "priority",
    progress: "Progress",
    people_suffix: " people",
    no_matching_projects: "No projects match your search.",

    team_subtitle: "Manage team members",
    member_search: "Search members...",
    no_matching_members: "No members match your search.",

    calendar_subtitle: "Schedules and events",
    day_events_title: "Events",
    month_events_title: "This month",
    pick_a_date: "Select a date on the calendar.",
    no_events_on_date: "No events on this date.",
    more_suffix: "more",

    settings_subtitle: "Account and application settings",
    profile_title: "Profile",
    display_name: "Display name",
    email: "Email",
    email_locked: "The email address cannot be changed.",
    notifications_title: "Notifications",
    notify_email: "Email notifications",
    notify_push: "Push notifications",
    notify_project_updates: "Project updates",
    notify_task_assignments: "Task assignments",
    notify_reminders: "Reminders",
    appearance_title: "Appearance",
    theme: "Theme",
    theme_light: "Light",
    theme_dark: "Dark",
    theme_system: "System",
    language: "Language",
    not_persisted: "Changes apply to this session only.",

    auth_title: "Sign in",
    auth_prompt: "Enter your email",
    not_found: "Page not found",
    read_only: "Data is read-only. Nothing was changed.",
};
