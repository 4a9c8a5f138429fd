//! The Wrike v4 operation table. One entry per exposed tool.

use crate::domain::{BodyKind, HttpMethod, Operation, Param, ParamKind, ParamLocation};

use crate::domain::ParamKind::{Any, Array, Boolean, Integer, Object, String as Str};

const fn path(name: &'static str, description: &'static str) -> Param {
    Param { name, location: ParamLocation::Path, kind: Str, required: true, description }
}

const fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Param {
    Param { name, location: ParamLocation::Query, kind, required: false, description }
}

const fn query_required(name: &'static str, kind: ParamKind, description: &'static str) -> Param {
    Param { name, location: ParamLocation::Query, kind, required: true, description }
}

const fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Param {
    Param { name, location: ParamLocation::Body, kind, required: false, description }
}

const fn body_required(name: &'static str, kind: ParamKind, description: &'static str) -> Param {
    Param { name, location: ParamLocation::Body, kind, required: true, description }
}

const fn raw_body(description: &'static str) -> Param {
    Param {
        name: "request_body",
        location: ParamLocation::RawBody,
        kind: Object,
        required: false,
        description,
    }
}

const FIELDS: &str = "Optional fields to include in the response (JSON array or string)";

pub static OPERATIONS: &[Operation] = &[
    // --- contacts ---
    Operation {
        name: "get_contacts",
        method: HttpMethod::Get,
        path: "/contacts",
        description: "List contacts, optionally filtered by deleted state and metadata, with field selection.",
        body: BodyKind::None,
        params: &[
            query("deleted", Boolean, "Return only contacts with this deleted state"),
            query("fields", Any, FIELDS),
            query("metadata", Any, "Metadata filter"),
        ],
    },
    Operation {
        name: "get_contacts_by_contactid",
        method: HttpMethod::Get,
        path: "/contacts/{contactId}",
        description: "Get one contact by ID.",
        body: BodyKind::None,
        params: &[path("contactId", "Contact ID"), query("fields", Any, FIELDS)],
    },
    Operation {
        name: "put_contacts_by_contactid",
        method: HttpMethod::Put,
        path: "/contacts/{contactId}",
        description: "Update a contact: metadata, billing and cost rates, job role, custom fields.",
        body: BodyKind::Fields,
        params: &[
            path("contactId", "Contact ID"),
            body("metadata", Array, "Metadata entries to set"),
            body("currentBillRate", Any, "Current bill rate"),
            body("currentCostRate", Any, "Current cost rate"),
            body("jobRoleId", Str, "Job role ID"),
            body("customFields", Array, "Custom field values"),
            body("fields", Any, FIELDS),
        ],
    },
    // --- users ---
    Operation {
        name: "get_users_by_userid",
        method: HttpMethod::Get,
        path: "/users/{userId}",
        description: "Get one user by ID.",
        body: BodyKind::None,
        params: &[path("userId", "User ID")],
    },
    Operation {
        name: "put_users_by_userid",
        method: HttpMethod::Put,
        path: "/users/{userId}",
        description: "Update a user's profile.",
        body: BodyKind::Fields,
        params: &[path("userId", "User ID"), body("profile", Object, "Profile fields to update")],
    },
    // --- groups ---
    Operation {
        name: "get_groups",
        method: HttpMethod::Get,
        path: "/groups",
        description: "List groups with optional metadata filter and pagination.",
        body: BodyKind::None,
        params: &[
            query("metadata", Any, "Metadata filter"),
            query("pageSize", Integer, "Page size"),
            query("pageToken", Str, "Page token from a previous response"),
            query("fields", Any, FIELDS),
        ],
    },
    Operation {
        name: "post_groups",
        method: HttpMethod::Post,
        path: "/groups",
        description: "Create a group.",
        body: BodyKind::Fields,
        params: &[
            body_required("title", Str, "Group title"),
            body("members", Array, "Member user IDs"),
            body("parent", Str, "Parent group ID"),
            body("avatar", Object, "Avatar settings"),
            body("metadata", Array, "Metadata entries"),
        ],
    },
    Operation {
        name: "get_groups_by_groupid",
        method: HttpMethod::Get,
        path: "/groups/{groupId}",
        description: "Get one group by ID.",
        body: BodyKind::None,
        params: &[path("groupId", "Group ID"), query("fields", Any, FIELDS)],
    },
    Operation {
        name: "put_groups_by_groupid",
        method: HttpMethod::Put,
        path: "/groups/{groupId}",
        description: "Update a group's title, membership, invitations, parent, avatar or metadata.",
        body: BodyKind::Fields,
        params: &[
            path("groupId", "Group ID"),
            body("title", Str, "New title"),
            body("addMembers", Array, "User IDs to add"),
            body("removeMembers", Array, "User IDs to remove"),
            body("addInvitations", Array, "Invitation IDs to add"),
            body("removeInvitations", Array, "Invitation IDs to remove"),
            body("parent", Str, "Parent group ID"),
            body("avatar", Object, "Avatar settings"),
            body("metadata", Array, "Metadata entries"),
        ],
    },
    Operation {
        name: "delete_groups_by_groupid",
        method: HttpMethod::Delete,
        path: "/groups/{groupId}",
        description: "Delete a group.",
        body: BodyKind::None,
        params: &[path("groupId", "Group ID")],
    },
    Operation {
        name: "put_groups_bulk",
        method: HttpMethod::Put,
        path: "/groups_bulk",
        description: "Update group memberships in bulk.",
        body: BodyKind::Fields,
        params: &[body_required("members", Array, "Bulk membership changes")],
    },
    // --- invitations ---
    Operation {
        name: "get_invitations",
        method: HttpMethod::Get,
        path: "/invitations",
        description: "List invitations.",
        body: BodyKind::None,
        params: &[],
    },
    Operation {
        name: "post_invitations",
        method: HttpMethod::Post,
        path: "/invitations",
        description: "Invite a user by email.",
        body: BodyKind::Fields,
        params: &[
            body_required("email", Str, "Invitee email"),
            body("firstName", Str, "First name"),
            body("lastName", Str, "Last name"),
            body("role", Str, "Role to assign"),
            body("external", Boolean, "Invite as external user"),
            body("subject", Str, "Custom email subject"),
            body("message", Str, "Custom email message"),
            body("userTypeId", Str, "User type ID"),
        ],
    },
    Operation {
        name: "put_invitations_by_invitationid",
        method: HttpMethod::Put,
        path: "/invitations/{invitationId}",
        description: "Update or resend an invitation.",
        body: BodyKind::Fields,
        params: &[
            path("invitationId", "Invitation ID"),
            body("resend", Boolean, "Resend the invitation email"),
            body("role", Str, "Role to assign"),
            body("external", Boolean, "External user flag"),
            body("userTypeId", Str, "User type ID"),
        ],
    },
    Operation {
        name: "delete_invitations_by_invitationid",
        method: HttpMethod::Delete,
        path: "/invitations/{invitationId}",
        description: "Delete an invitation.",
        body: BodyKind::None,
        params: &[path("invitationId", "Invitation ID")],
    },
    // --- account ---
    Operation {
        name: "get_a_ccount",
        method: HttpMethod::Get,
        path: "/account",
        description: "Get the current account.",
        body: BodyKind::None,
        params: &[query("fields", Any, FIELDS)],
    },
    Operation {
        name: "put_a_ccount",
        method: HttpMethod::Put,
        path: "/account",
        description: "Update account metadata.",
        body: BodyKind::Fields,
        params: &[body("metadata", Array, "Metadata entries")],
    },
    // --- workflows ---
    Operation {
        name: "get_workflows",
        method: HttpMethod::Get,
        path: "/workflows",
        description: "List workflows.",
        body: BodyKind::None,
        params: &[],
    },
    Operation {
        name: "post_workflows",
        method: HttpMethod::Post,
        path: "/workflows",
        description: "Create a workflow.",
        body: BodyKind::Raw,
        params: &[
            query("name", Str, "Workflow name"),
            raw_body("Request body sent as-is"),
        ],
    },
    Operation {
        name: "put_workflows_by_workflowid",
        method: HttpMethod::Put,
        path: "/workflows/{workflowId}",
        description: "Update a workflow's name, visibility or statuses.",
        body: BodyKind::Raw,
        params: &[
            path("workflowId", "Workflow ID"),
            query("name", Str, "New name"),
            query("hidden", Boolean, "Hide the workflow"),
            raw_body("Request body sent as-is"),
        ],
    },
    // --- custom fields ---
    Operation {
        name: "get_customfields",
        method: HttpMethod::Get,
        path: "/customfields",
        description: "List custom fields.",
        body: BodyKind::None,
        params: &[],
    },
    Operation {
        name: "post_customfields",
        method: HttpMethod::Post,
        path: "/customfields",
        description: "Create a custom field.",
        body: BodyKind::Raw,
        params: &[
            query_required("title", Str, "Custom field title"),
            query_required("type", Str, "Custom field type"),
            query("spaceId", Str, "Space ID"),
            query("sharing", Any, "Sharing settings"),
            query("shareds", Any, "Shared user IDs"),
            query("settings", Any, "Field settings"),
            raw_body("Request body sent as-is"),
        ],
    },
    Operation {
        name: "get_customfields_by_customfieldid",
        method: HttpMethod::Get,
        path: "/customfields/{customFieldId}",
        description: "Get one custom field by ID.",
        body: BodyKind::None,
        params: &[path("customFieldId", "Custom field ID")],
    },
    Operation {
        name: "put_customfields_by_customfieldid",
        method: HttpMethod::Put,
        path: "/customfields/{customFieldId}",
        description: "Update a custom field.",
        body: BodyKind::Empty,
        params: &[
            path("customFieldId", "Custom field ID"),
            query("title", Str, "New title"),
            query("type", Str, "New type"),
            query("changeScope", Str, "Scope of the type change"),
            query("spaceId", Str, "Space ID"),
            query("sharing", Any, "Sharing settings"),
            query("addShareds", Any, "User IDs to share with"),
            query("removeShareds", Any, "User IDs to unshare"),
            query("settings", Any, "Field settings"),
            query("addMirrors", Any, "Mirrors to add"),
            query("removeMirrors", Any, "Mirrors to remove"),
        ],
    },
    Operation {
        name: "delete_customfields_by_customfieldid",
        method: HttpMethod::Delete,
        path: "/customfields/{customFieldId}",
        description: "Delete a custom field.",
        body: BodyKind::None,
        params: &[path("customFieldId", "Custom field ID")],
    },
    // --- folders ---
    Operation {
        name: "get_folders",
        method: HttpMethod::Get,
        path: "/folders",
        description: "List folders and projects with filtering, pagination and field selection.",
        body: BodyKind::None,
        params: &[
            query("permalink", Str, "Folder permalink"),
            query("descendants", Boolean, "Include descendants"),
            query("metadata", Any, "Metadata filter"),
            query("customFields", Any, "Custom field filter"),
            query("updatedDate", Any, "Updated date range"),
            query("withInvitations", Boolean, "Include invitations"),
            query("project", Boolean, "Only projects"),
            query("deleted", Boolean, "Return folders from the Recycle Bin"),
            query("contractTypes", Any, "Contract types filter"),
            query("plainTextCustomFields", Boolean, "Strip HTML from custom fields"),
            query("customItemTypes", Any, "Custom item type IDs"),
            query("pageSize", Integer, "Page size"),
            query("nextPageToken", Str, "Token for the next page"),
            query("fields", Any, FIELDS),
        ],
    },
    Operation {
        name: "get_folders_by_folderid_folders",
        method: HttpMethod::Get,
        path: "/folders/{folderId}/folders",
        description: "List the subfolders of a folder.",
        body: BodyKind::None,
        params: &[
            path("folderId", "Parent folder ID"),
            query("permalink", Str, "Folder permalink"),
            query("descendants", Boolean, "Include descendants"),
            query("metadata", Any, "Metadata filter"),
            query("customFields", Any, "Custom field filter"),
            query("updatedDate", Any, "Updated date range"),
            query("withInvitations", Boolean, "Include invitations"),
            query("project", Boolean, "Only projects"),
            query("contractTypes", Any, "Contract types filter"),
            query("plainTextCustomFields", Boolean, "Strip HTML from custom fields"),
            query("customItemTypes", Any, "Custom item type IDs"),
            query("pageSize", Integer, "Page size"),
            query("nextPageToken", Str, "Token for the next page"),
            query("fields", Any, FIELDS),
        ],
    },
    Operation {
        name: "post_folders_by_folderid_folders",
        method: HttpMethod::Post,
        path: "/folders/{folderId}/folders",
        description: "Create a subfolder in a folder.",
        body: BodyKind::Fields,
        params: &[
            path("folderId", "Parent folder ID"),
            body_required("title", Str, "Folder title"),
            body("description", Str, "Folder description"),
            body("shareds", Array, "User IDs to share with"),
            body("metadata", Array, "Metadata entries"),
            body("customFields", Array, "Custom field values"),
            body("customColumns", Array, "Custom column IDs"),
            body("project", Object, "Project settings"),
            body("userAccessRoles", Object, "Access roles per user"),
            body("withInvitations", Boolean, "Send invitations"),
            body("customItemTypeId", Str, "Custom item type ID"),
            body("plainTextCustomFields", Boolean, "Strip HTML from custom fields"),
            body("fields", Any, FIELDS),
        ],
    },
    Operation {
        name: "delete_folders_by_folderid",
        method: HttpMethod::Delete,
        path: "/folders/{folderId}",
        description: "Move a folder to the Recycle Bin.",
        body: BodyKind::None,
        params: &[path("folderId", "Folder ID")],
    },
    Operation {
        name: "put_folders_by_folderid",
        method: HttpMethod::Put,
        path: "/folders/{folderId}",
        description: "Update a folder's properties, parents, sharing and custom fields.",
        body: BodyKind::Fields,
        params: &[
            path("folderId", "Folder ID"),
            body("title", Str, "New title"),
            body("description", Str, "New description"),
            body("addParents", Array, "Parent folder IDs to add"),
            body("removeParents", Array, "Parent folder IDs to remove"),
            body("addShareds", Array, "User IDs to share with"),
            body("removeShareds", Array, "User IDs to unshare"),
            body("metadata", Array, "Metadata entries"),
            body("restore", Boolean, "Restore from the Recycle Bin"),
            body("customFields", Array, "Custom field values"),
            body("customColumns", Array, "Custom column IDs"),
            body("clearCustomColumns", Boolean, "Clear custom columns"),
            body("project", Object, "Project settings"),
            body("addAccessRoles", Object, "Access roles to add"),
            body("removeAccessRoles", Object, "Access roles to remove"),
            body("withInvitations", Boolean, "Send invitations"),
            body("convertToCustomItemType", Str, "Custom item type to convert to"),
            body("plainTextCustomFields", Boolean, "Strip HTML from custom fields"),
            body("fields", Any, FIELDS),
        ],
    },
    // --- tasks ---
    Operation {
        name: "get_tasks",
        method: HttpMethod::Get,
        path: "/tasks",
        description: "Search tasks with filtering, sorting, pagination and field selection.",
        body: BodyKind::None,
        params: &[
            query("descendants", Boolean, "Include descendants"),
            query("title", Str, "Title filter"),
            query("status", Any, "Status filter"),
            query("importance", Str, "Importance filter"),
            query("startDate", Any, "Start date range"),
            query("dueDate", Any, "Due date range"),
            query("scheduledDate", Any, "Scheduled date range"),
            query("createdDate", Any, "Created date range"),
            query("updatedDate", Any, "Updated date range"),
            query("completedDate", Any, "Completed date range"),
            query("authors", Any, "Author user IDs"),
            query("responsibles", Any, "Responsible user IDs"),
            query("responsiblePlaceholders", Any, "Responsible placeholder IDs"),
            query("permalink", Str, "Task permalink"),
            query("type", Str, "Task type"),
            query("limit", Integer, "Maximum number of tasks"),
            query("sortField", Str, "Sort field"),
            query("sortOrder", Str, "Sort order (Asc or Desc)"),
            query("subTasks", Boolean, "Include subtasks"),
            query("pageSize", Integer, "Page size"),
            query("nextPageToken", Str, "Token for the next page"),
            query("metadata", Any, "Metadata filter"),
            query("customField", Any, "Single custom field filter"),
            query("customFields", Any, "Custom field filters"),
            query("customStatuses", Any, "Custom status IDs"),
            query("withInvitations", Boolean, "Include invitations"),
            query("billingTypes", Any, "Billing types filter"),
            query("plainTextCustomFields", Boolean, "Strip HTML from custom fields"),
            query("customItemTypes", Any, "Custom item type IDs"),
            query("fields", Any, FIELDS),
        ],
    },
    Operation {
        name: "get_tasks_by_taskid",
        method: HttpMethod::Get,
        path: "/tasks/{taskId}",
        description: "Get one task by ID.",
        body: BodyKind::None,
        params: &[path("taskId", "Task ID"), query("fields", Any, FIELDS)],
    },
    Operation {
        name: "put_tasks_by_taskid",
        method: HttpMethod::Put,
        path: "/tasks/{taskId}",
        description: "Update a task's properties, relationships, assignees and custom fields.",
        body: BodyKind::Fields,
        params: &[
            path("taskId", "Task ID"),
            body("title", Str, "New title"),
            body("description", Str, "New description"),
            body("status", Str, "New status"),
            body("importance", Str, "New importance"),
            body("dates", Object, "Task dates"),
            body("addParents", Array, "Parent folder IDs to add"),
            body("removeParents", Array, "Parent folder IDs to remove"),
            body("addShareds", Array, "User IDs to share with"),
            body("removeShareds", Array, "User IDs to unshare"),
            body("addResponsibles", Array, "Responsible user IDs to add"),
            body("removeResponsibles", Array, "Responsible user IDs to remove"),
            body("addResponsiblePlaceholders", Array, "Responsible placeholders to add"),
            body("removeResponsiblePlaceholders", Array, "Responsible placeholders to remove"),
            body("addFollowers", Array, "Follower user IDs to add"),
            body("follow", Boolean, "Follow the task"),
            body("priorityBefore", Str, "Place before this task ID"),
            body("priorityAfter", Str, "Place after this task ID"),
            body("addSuperTasks", Array, "Parent task IDs to add"),
            body("removeSuperTasks", Array, "Parent task IDs to remove"),
            body("metadata", Array, "Metadata entries"),
            body("customFields", Array, "Custom field values"),
            body("customStatus", Str, "Custom status ID"),
            body("restore", Boolean, "Restore from the Recycle Bin"),
            body("effortAllocation", Object, "Effort allocation"),
            body("billingType", Str, "Billing type"),
            body("withInvitations", Boolean, "Send invitations"),
            body("convertToCustomItemType", Str, "Custom item type to convert to"),
            body("plainTextCustomFields", Boolean, "Strip HTML from custom fields"),
            body("fields", Any, FIELDS),
        ],
    },
    Operation {
        name: "delete_tasks_by_taskid",
        method: HttpMethod::Delete,
        path: "/tasks/{taskId}",
        description: "Move a task to the Recycle Bin.",
        body: BodyKind::None,
        params: &[path("taskId", "Task ID")],
    },
    Operation {
        name: "post_folders_by_folderid_tasks",
        method: HttpMethod::Post,
        path: "/folders/{folderId}/tasks",
        description: "Create a task in a folder.",
        body: BodyKind::Fields,
        params: &[
            path("folderId", "Folder ID"),
            body_required("title", Str, "Task title"),
            body("description", Str, "Task description"),
            body("status", Str, "Status"),
            body("importance", Str, "Importance"),
            body("dates", Object, "Task dates"),
            body("shareds", Array, "User IDs to share with"),
            body("parents", Array, "Parent folder IDs"),
            body("responsibles", Array, "Responsible user IDs"),
            body("responsiblePlaceholders", Array, "Responsible placeholder IDs"),
            body("followers", Array, "Follower user IDs"),
            body("follow", Boolean, "Follow the task"),
            body("priorityBefore", Str, "Place before this task ID"),
            body("priorityAfter", Str, "Place after this task ID"),
            body("superTasks", Array, "Parent task IDs"),
            body("metadata", Array, "Metadata entries"),
            body("customFields", Array, "Custom field values"),
            body("customStatus", Str, "Custom status ID"),
            body("effortAllocation", Object, "Effort allocation"),
            body("billingType", Str, "Billing type"),
            body("withInvitations", Boolean, "Send invitations"),
            body("customItemTypeId", Str, "Custom item type ID"),
            body("plainTextCustomFields", Boolean, "Strip HTML from custom fields"),
            body("fields", Any, FIELDS),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn exposes_every_wrike_tool_once() {
        assert_eq!(OPERATIONS.len(), 35);
        let names: HashSet<&str> = OPERATIONS.iter().map(|op| op.name).collect();
        assert_eq!(names.len(), OPERATIONS.len());
    }

    #[test]
    fn every_placeholder_is_a_required_path_param() {
        for op in OPERATIONS {
            for segment in op.path.split('/') {
                if let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                    let p = op.param(name).unwrap_or_else(|| panic!("{}: no param {name}", op.name));
                    assert_eq!(p.location, ParamLocation::Path, "{}", op.name);
                    assert!(p.required, "{}", op.name);
                }
            }
            for p in op.params.iter().filter(|p| p.location == ParamLocation::Path) {
                assert!(op.path.contains(&format!("{{{}}}", p.name)), "{}: {}", op.name, p.name);
            }
        }
    }

    #[test]
    fn body_kind_matches_method_and_params() {
        for op in OPERATIONS {
            let has_body_fields = op.params.iter().any(|p| p.location == ParamLocation::Body);
            let has_raw = op.params.iter().any(|p| p.location == ParamLocation::RawBody);
            match op.method {
                HttpMethod::Get | HttpMethod::Delete => {
                    assert_eq!(op.body, BodyKind::None, "{}", op.name);
                    assert!(!has_body_fields && !has_raw, "{}", op.name);
                }
                HttpMethod::Post | HttpMethod::Put => {
                    assert_ne!(op.body, BodyKind::None, "{}", op.name);
                }
            }
            assert_eq!(has_body_fields, op.body == BodyKind::Fields, "{}", op.name);
            assert_eq!(has_raw, op.body == BodyKind::Raw, "{}", op.name);
        }
    }

    #[test]
    fn delete_operations_take_only_path_params() {
        for op in OPERATIONS.iter().filter(|op| op.method == HttpMethod::Delete) {
            assert!(op.params.iter().all(|p| p.location == ParamLocation::Path), "{}", op.name);
        }
    }

    #[test]
    fn param_names_are_unique_per_operation() {
        for op in OPERATIONS {
            let names: HashSet<&str> = op.params.iter().map(|p| p.name).collect();
            assert_eq!(names.len(), op.params.len(), "{}", op.name);
        }
    }
}
