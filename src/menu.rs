//! Static navigation model: view identifiers, the sidebar menu forest, and
//! per-group expansion state.

use std::collections::BTreeMap;

/// Every navigable screen in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewType {
    Dashboard,

    // User management
    AddUser,
    AllUsers,

    // Department management
    AddDept,
    AllDepts,

    // Project management
    AddProject,
    AllProjects,

    // Task management
    AddTask,
    AllTasks,

    // Attendance management
    WorkRecordRegistration,
    ViewAttendanceByDate,
    ViewDailyDetails,
    AttendanceApproval,

    // Report management
    ReportSummary,

    // System
    GeneralSettings,
    AuditLogs,

    // Menu management
    AddMenu,
    AllMenus,
}

impl ViewType {
    pub const ALL: [ViewType; 18] = [
        ViewType::Dashboard,
        ViewType::AddUser,
        ViewType::AllUsers,
        ViewType::AddDept,
        ViewType::AllDepts,
        ViewType::AddProject,
        ViewType::AllProjects,
        ViewType::AddTask,
        ViewType::AllTasks,
        ViewType::WorkRecordRegistration,
        ViewType::ViewAttendanceByDate,
        ViewType::ViewDailyDetails,
        ViewType::AttendanceApproval,
        ViewType::ReportSummary,
        ViewType::GeneralSettings,
        ViewType::AuditLogs,
        ViewType::AddMenu,
        ViewType::AllMenus,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ViewType::Dashboard => "Dashboard",
            ViewType::AddUser => "Add User",
            ViewType::AllUsers => "All User",
            ViewType::AddDept => "Add Department",
            ViewType::AllDepts => "All Department",
            ViewType::AddProject => "Add Project",
            ViewType::AllProjects => "All Project",
            ViewType::AddTask => "Add Task",
            ViewType::AllTasks => "All Task",
            ViewType::WorkRecordRegistration => "Work Record Registration",
            ViewType::ViewAttendanceByDate => "View Attendance By Date",
            ViewType::ViewDailyDetails => "View Daily Details",
            ViewType::AttendanceApproval => "Attendance Approval",
            ViewType::ReportSummary => "Report Summary",
            ViewType::GeneralSettings => "General Settings",
            ViewType::AuditLogs => "Audit Logs",
            ViewType::AddMenu => "Add Menu",
            ViewType::AllMenus => "All Menu",
        }
    }
}

/// Symbolic icon identifier. The menu data stores only the identifier;
/// the presentation layer resolves it to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconId {
    Dashboard,
    Users,
    Building,
    Briefcase,
    CheckSquare,
    Calendar,
    Chart,
    Gear,
    Menu,
    Bell,
    Search,
    Clock,
    Logout,
}

impl IconId {
    pub const ALL: [IconId; 13] = [
        IconId::Dashboard,
        IconId::Users,
        IconId::Building,
        IconId::Briefcase,
        IconId::CheckSquare,
        IconId::Calendar,
        IconId::Chart,
        IconId::Gear,
        IconId::Menu,
        IconId::Bell,
        IconId::Search,
        IconId::Clock,
        IconId::Logout,
    ];

    pub fn glyph(&self) -> &'static str {
        match self {
            IconId::Dashboard => "◧",
            IconId::Users => "◉",
            IconId::Building => "▦",
            IconId::Briefcase => "▣",
            IconId::CheckSquare => "☑",
            IconId::Calendar => "▤",
            IconId::Chart => "▥",
            IconId::Gear => "⚙",
            IconId::Menu => "≡",
            IconId::Bell => "⍾",
            IconId::Search => "⌕",
            IconId::Clock => "◷",
            IconId::Logout => "⏻",
        }
    }

    /// Fallback for terminals without the wider glyph set.
    pub fn ascii(&self) -> &'static str {
        match self {
            IconId::Dashboard => "#",
            IconId::Users => "@",
            IconId::Building => "B",
            IconId::Briefcase => "P",
            IconId::CheckSquare => "T",
            IconId::Calendar => "A",
            IconId::Chart => "R",
            IconId::Gear => "S",
            IconId::Menu => "M",
            IconId::Bell => "!",
            IconId::Search => "/",
            IconId::Clock => "C",
            IconId::Logout => "X",
        }
    }
}

/// A leaf menu row bound to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf {
    pub id: &'static str,
    pub label: &'static str,
    pub target: ViewType,
}

/// A top-level menu entry: either a direct navigation target or a group of
/// leaves. The tagged variant makes "exactly one of target/children" hold by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Leaf {
        id: &'static str,
        label: &'static str,
        icon: IconId,
        target: ViewType,
    },
    Group {
        id: &'static str,
        label: &'static str,
        icon: IconId,
        children: &'static [Leaf],
    },
}

impl MenuEntry {
    pub fn id(&self) -> &'static str {
        match self {
            MenuEntry::Leaf { id, .. } | MenuEntry::Group { id, .. } => id,
        }
    }

}

/// The sidebar forest: one Dashboard leaf followed by eight groups.
pub fn menu_structure() -> Vec<MenuEntry> {
    vec![
        MenuEntry::Leaf {
            id: "dashboard",
            label: "Dashboard",
            icon: IconId::Dashboard,
            target: ViewType::Dashboard,
        },
        MenuEntry::Group {
            id: "user-mgmt",
            label: "User Management",
            icon: IconId::Users,
            children: &[
                Leaf {
                    id: "add-user",
                    label: "Add User",
                    target: ViewType::AddUser,
                },
                Leaf {
                    id: "all-users",
                    label: "All User",
                    target: ViewType::AllUsers,
                },
            ],
        },
        MenuEntry::Group {
            id: "dept-mgmt",
            label: "Department Management",
            icon: IconId::Building,
            children: &[
                Leaf {
                    id: "add-dept",
                    label: "Add Department",
                    target: ViewType::AddDept,
                },
                Leaf {
                    id: "all-depts",
                    label: "All Department",
                    target: ViewType::AllDepts,
                },
            ],
        },
        MenuEntry::Group {
            id: "proj-mgmt",
            label: "Project Management",
            icon: IconId::Briefcase,
            children: &[
                Leaf {
                    id: "add-proj",
                    label: "Add Project",
                    target: ViewType::AddProject,
                },
                Leaf {
                    id: "all-projs",
                    label: "All Project",
                    target: ViewType::AllProjects,
                },
            ],
        },
        MenuEntry::Group {
            id: "task-mgmt",
            label: "Task Management",
            icon: IconId::CheckSquare,
            children: &[
                Leaf {
                    id: "add-task",
                    label: "Add Task",
                    target: ViewType::AddTask,
                },
                Leaf {
                    id: "all-tasks",
                    label: "All Task",
                    target: ViewType::AllTasks,
                },
            ],
        },
        MenuEntry::Group {
            id: "attend-mgmt",
            label: "Attendance Management",
            icon: IconId::Calendar,
            children: &[
                Leaf {
                    id: "work-rec",
                    label: "Work Record Registration",
                    target: ViewType::WorkRecordRegistration,
                },
                Leaf {
                    id: "view-date",
                    label: "View Attendance By Date",
                    target: ViewType::ViewAttendanceByDate,
                },
                Leaf {
                    id: "view-daily",
                    label: "View Daily Details",
                    target: ViewType::ViewDailyDetails,
                },
                Leaf {
                    id: "attend-app",
                    label: "Attendance Approval",
                    target: ViewType::AttendanceApproval,
                },
            ],
        },
        MenuEntry::Group {
            id: "report-mgmt",
            label: "Report Management",
            icon: IconId::Chart,
            children: &[Leaf {
                id: "rep-sum",
                label: "Report Summary",
                target: ViewType::ReportSummary,
            }],
        },
        MenuEntry::Group {
            id: "system",
            label: "System",
            icon: IconId::Gear,
            children: &[
                Leaf {
                    id: "gen-settings",
                    label: "General Settings",
                    target: ViewType::GeneralSettings,
                },
                Leaf {
                    id: "audit-logs",
                    label: "Audit Logs",
                    target: ViewType::AuditLogs,
                },
            ],
        },
        MenuEntry::Group {
            id: "menu-mgmt",
            label: "Menu Management",
            icon: IconId::Menu,
            children: &[
                Leaf {
                    id: "add-menu",
                    label: "Add Menu",
                    target: ViewType::AddMenu,
                },
                Leaf {
                    id: "all-menu",
                    label: "All Menu",
                    target: ViewType::AllMenus,
                },
            ],
        },
    ]
}

/// Per-group expand/collapse flags. Groups absent from the map count as
/// collapsed, so toggling an unseen id expands it.
#[derive(Debug, Clone, Default)]
pub struct ExpansionState {
    expanded: BTreeMap<String, bool>,
}

impl ExpansionState {
    /// Initial state: user and attendance management start expanded.
    pub fn new() -> Self {
        let mut expanded = BTreeMap::new();
        expanded.insert("user-mgmt".to_string(), true);
        expanded.insert("attend-mgmt".to_string(), true);
        Self { expanded }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.get(id).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, id: &str) {
        let flag = self.expanded.entry(id.to_string()).or_insert(false);
        *flag = !*flag;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_is_one_leaf_and_eight_groups() {
        let menu = menu_structure();
        assert_eq!(menu.len(), 9);
        assert!(matches!(menu[0], MenuEntry::Leaf { .. }));
        assert!(menu[1..].iter().all(|e| matches!(e, MenuEntry::Group { .. })));

        let ids: Vec<&str> = menu.iter().map(|e| e.id()).collect();
        assert_eq!(
            ids,
            [
                "dashboard",
                "user-mgmt",
                "dept-mgmt",
                "proj-mgmt",
                "task-mgmt",
                "attend-mgmt",
                "report-mgmt",
                "system",
                "menu-mgmt"
            ]
        );
    }

    #[test]
    fn every_view_has_exactly_one_menu_binding() {
        let menu = menu_structure();
        for view in ViewType::ALL {
            let count = menu
                .iter()
                .flat_map(|entry| match entry {
                    MenuEntry::Leaf { target, .. } => vec![*target],
                    MenuEntry::Group { children, .. } => {
                        children.iter().map(|leaf| leaf.target).collect()
                    }
                })
                .filter(|target| *target == view)
                .count();
            assert_eq!(count, 1, "{view:?} should be bound once");
        }
    }

    #[test]
    fn ascii_icon_fallbacks_are_ascii() {
        for icon in IconId::ALL {
            assert!(icon.ascii().is_ascii(), "{icon:?} fallback is not ascii");
            assert!(!icon.glyph().is_empty());
        }
    }

    #[test]
    fn group_children_are_non_empty() {
        for entry in menu_structure() {
            if let MenuEntry::Group { id, children, .. } = entry {
                assert!(!children.is_empty(), "group {id} has no children");
            }
        }
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut state = ExpansionState::new();
        assert!(state.is_expanded("user-mgmt"));
        state.toggle("user-mgmt");
        assert!(!state.is_expanded("user-mgmt"));
        state.toggle("user-mgmt");
        assert!(state.is_expanded("user-mgmt"));

        // Unseen ids count as collapsed, so the first toggle expands.
        assert!(!state.is_expanded("report-mgmt"));
        state.toggle("report-mgmt");
        assert!(state.is_expanded("report-mgmt"));
        state.toggle("report-mgmt");
        assert!(!state.is_expanded("report-mgmt"));
    }

    #[test]
    fn initial_expansion_matches_defaults() {
        let state = ExpansionState::new();
        assert!(state.is_expanded("user-mgmt"));
        assert!(state.is_expanded("attend-mgmt"));
        for id in ["dept-mgmt", "proj-mgmt", "task-mgmt", "report-mgmt", "system", "menu-mgmt"] {
            assert!(!state.is_expanded(id), "{id} should start collapsed");
        }
    }
}
