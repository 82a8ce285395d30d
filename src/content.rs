//! Content router: a total mapping from every view to a static panel
//! description. Panels are pure data; rendering lives in `ui`.

use crate::menu::ViewType;

/// Static description of what the content area shows for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    pub body: PanelBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelBody {
    /// Dashboard stat cards.
    Stats(&'static [StatCard]),
    /// A framed window with a data table, inert search bar and create button.
    Table(TableSpec),
    /// A framed window with a labeled form and inert submit button.
    Form(FormSpec),
    /// Check in / check out screen with the current time.
    AttendanceCheck,
    /// Screens that exist in the menu but have no content yet.
    ComingSoon,
    /// Router fallback when no view is mapped.
    Welcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub columns: &'static [&'static str],
    pub rows: &'static [&'static [&'static str]],
    /// Label on the inert create button, e.g. 新ユーザー作成.
    pub create_label: &'static str,
}

impl TableSpec {
    /// Trailing 編集/削除 cells are action columns, not data.
    pub fn action_columns(&self) -> usize {
        2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormSpec {
    pub fields: &'static [Field],
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select(&'static [&'static str]),
}

const DASHBOARD_STATS: &[StatCard] = &[
    StatCard { label: "Total Users", value: "2,543" },
    StatCard { label: "Total Projects", value: "42" },
    StatCard { label: "Open Tasks", value: "156" },
    StatCard { label: "Attendance", value: "98%" },
];

const ADD_USER_FORM: FormSpec = FormSpec {
    fields: &[
        Field { label: "ユーザー名", kind: FieldKind::Text },
        Field { label: "メールアドレス", kind: FieldKind::Text },
        Field {
            label: "部署名",
            kind: FieldKind::Select(&["開発部", "人事部", "営業部"]),
        },
        Field { label: "パスワード", kind: FieldKind::Text },
    ],
    submit_label: "作成",
};

const ALL_USERS_TABLE: TableSpec = TableSpec {
    columns: &["ユーザー名", "メール", "部署名", "ステータス", "編集", "削除"],
    rows: &[
        &["山田 太郎", "taro@test.com", "開発部", "Active", "", ""],
        &["鈴木 花子", "hanako@test.com", "人事部", "Active", "", ""],
        &["佐藤 次郎", "jiro@test.com", "営業部", "Away", "", ""],
    ],
    create_label: "新ユーザー作成",
};

const ADD_DEPT_FORM: FormSpec = FormSpec {
    fields: &[
        Field { label: "部署名", kind: FieldKind::Text },
        Field {
            label: "プロジェクト名",
            kind: FieldKind::Select(&["Banking App", "Recruitment", "Salesforce"]),
        },
        Field {
            label: "タスク名",
            kind: FieldKind::Select(&["Backend", "Design", "Meeting"]),
        },
    ],
    submit_label: "作成",
};

const ALL_DEPTS_TABLE: TableSpec = TableSpec {
    columns: &["Department名", "Project名", "Task名", "編集", "削除"],
    rows: &[
        &["開発部", "Banking App", "Backend API", "", ""],
        &["人事部", "Recruitment", "Interview", "", ""],
        &["営業部", "Q4 Sales", "Cold Calling", "", ""],
    ],
    create_label: "新部署作成",
};

const ADD_PROJECT_FORM: FormSpec = FormSpec {
    fields: &[
        Field { label: "プロジェクト名", kind: FieldKind::Text },
        Field {
            label: "部署名",
            kind: FieldKind::Select(&["開発部", "人事部", "営業部"]),
        },
        Field {
            label: "タスク名",
            kind: FieldKind::Select(&["Design", "Coding", "Testing"]),
        },
    ],
    submit_label: "作成",
};

const ALL_PROJECTS_TABLE: TableSpec = TableSpec {
    columns: &["Project名", "Department名", "Task名", "編集", "削除"],
    rows: &[
        &["Banking App", "開発部", "Backend API", "", ""],
        &["Recruitment", "人事部", "Interview", "", ""],
        &["Website Redesign", "営業部", "Mockups", "", ""],
    ],
    create_label: "新プロジェクト作成",
};

const ADD_TASK_FORM: FormSpec = FormSpec {
    fields: &[
        Field { label: "タスク名", kind: FieldKind::Text },
        Field {
            label: "部署名",
            kind: FieldKind::Select(&["開発部", "人事部", "営業部"]),
        },
        Field {
            label: "プロジェクト名",
            kind: FieldKind::Select(&["Banking App", "Recruitment"]),
        },
        Field { label: "ノート", kind: FieldKind::Text },
    ],
    submit_label: "作成",
};

const ALL_TASKS_TABLE: TableSpec = TableSpec {
    columns: &["Task 名", "Project名", "Department名", "ノート", "編集", "削除"],
    rows: &[
        &["Code", "Banking App", "開発部", "Urgent", "", ""],
        &["Interview", "Recruitment", "人事部", "Online", "", ""],
        &["Test", "Banking App", "開発部", "Module A", "", ""],
    ],
    create_label: "新タスク作成",
};

/// Select the panel for a view. Total over `ViewType`; anything unmapped
/// falls back to the welcome panel rather than failing.
pub fn panel_for(view: ViewType) -> Panel {
    mapped_panel(view).unwrap_or_else(welcome_panel)
}

fn mapped_panel(view: ViewType) -> Option<Panel> {
    let panel = match view {
        ViewType::Dashboard => Panel {
            title: "Dashboard Overview",
            body: PanelBody::Stats(DASHBOARD_STATS),
        },
        ViewType::AddUser => Panel {
            title: "AddUser",
            body: PanelBody::Form(ADD_USER_FORM),
        },
        ViewType::AllUsers => Panel {
            title: "All User",
            body: PanelBody::Table(ALL_USERS_TABLE),
        },
        ViewType::AddDept => Panel {
            title: "AddDepartment",
            body: PanelBody::Form(ADD_DEPT_FORM),
        },
        ViewType::AllDepts => Panel {
            title: "All Department",
            body: PanelBody::Table(ALL_DEPTS_TABLE),
        },
        ViewType::AddProject => Panel {
            title: "AddProject",
            body: PanelBody::Form(ADD_PROJECT_FORM),
        },
        ViewType::AllProjects => Panel {
            title: "All Project",
            body: PanelBody::Table(ALL_PROJECTS_TABLE),
        },
        ViewType::AddTask => Panel {
            title: "AddTask",
            body: PanelBody::Form(ADD_TASK_FORM),
        },
        ViewType::AllTasks => Panel {
            title: "All Task",
            body: PanelBody::Table(ALL_TASKS_TABLE),
        },
        ViewType::WorkRecordRegistration => Panel {
            title: "Attendance Check",
            body: PanelBody::AttendanceCheck,
        },
        ViewType::ViewAttendanceByDate
        | ViewType::ViewDailyDetails
        | ViewType::AttendanceApproval
        | ViewType::ReportSummary
        | ViewType::GeneralSettings
        | ViewType::AuditLogs
        | ViewType::AddMenu
        | ViewType::AllMenus => Panel {
            title: view.title(),
            body: PanelBody::ComingSoon,
        },
    };
    Some(panel)
}

/// Default panel for anything the mapping does not cover.
pub fn welcome_panel() -> Panel {
    Panel {
        title: "Welcome to Dashboard",
        body: PanelBody::Welcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_is_total() {
        for view in ViewType::ALL {
            let panel = panel_for(view);
            assert!(!panel.title.is_empty(), "{view:?} has an empty title");
        }
    }

    #[test]
    fn fallback_is_the_welcome_panel() {
        let panel = welcome_panel();
        assert_eq!(panel.body, PanelBody::Welcome);
        assert!(!panel.title.is_empty());
    }

    #[test]
    fn dashboard_maps_to_stats() {
        let panel = panel_for(ViewType::Dashboard);
        match panel.body {
            PanelBody::Stats(cards) => {
                assert_eq!(cards.len(), 4);
                assert_eq!(cards[0].label, "Total Users");
                assert_eq!(cards[0].value, "2,543");
            }
            other => panic!("expected stats, got {other:?}"),
        }
    }

    #[test]
    fn table_rows_match_columns() {
        for view in ViewType::ALL {
            if let PanelBody::Table(table) = panel_for(view).body {
                for row in table.rows {
                    assert_eq!(
                        row.len(),
                        table.columns.len(),
                        "{view:?} row width mismatch"
                    );
                }
                assert!(table.columns.len() > table.action_columns());
            }
        }
    }

    #[test]
    fn forms_have_fields_and_submit_label() {
        for view in ViewType::ALL {
            if let PanelBody::Form(form) = panel_for(view).body {
                assert!(!form.fields.is_empty(), "{view:?} form has no fields");
                assert_eq!(form.submit_label, "作成");
            }
        }
    }

    #[test]
    fn select_fields_carry_options() {
        for view in ViewType::ALL {
            if let PanelBody::Form(form) = panel_for(view).body {
                for field in form.fields {
                    if let FieldKind::Select(options) = field.kind {
                        assert!(!options.is_empty(), "{view:?} {} empty select", field.label);
                    }
                }
            }
        }
    }
}
