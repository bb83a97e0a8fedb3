//! The static pathfinding edge taxonomy: category → subcategory → edge
//! type. Edge type strings match the backend's relationship kinds.

pub struct Category {
    pub name: &'static str,
    pub subcategories: &'static [Subcategory],
}

pub struct Subcategory {
    pub name: &'static str,
    pub edge_types: &'static [&'static str],
}

impl Category {
    /// Whether any descendant edge type matches the dialog search box.
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty()
            || self
                .subcategories
                .iter()
                .any(|subcategory| subcategory.matches(query))
    }
}

impl Subcategory {
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.edge_types
            .iter()
            .any(|edge_type| edge_type.to_lowercase().contains(&query))
    }
}

pub static ALL_EDGE_TYPES: &[Category] = &[
    Category {
        name: "Active Directory",
        subcategories: &[
            Subcategory {
                name: "Active Directory Structure",
                edge_types: &[
                    "Contains",
                    "DCFor",
                    "GPLink",
                    "HasSIDHistory",
                    "MemberOf",
                    "TrustedBy",
                ],
            },
            Subcategory {
                name: "Lateral Movement",
                edge_types: &[
                    "AdminTo",
                    "AllowedToAct",
                    "AllowedToDelegate",
                    "CanPSRemote",
                    "CanRDP",
                    "ExecuteDCOM",
                    "SQLAdmin",
                ],
            },
            Subcategory {
                name: "Credential Access",
                edge_types: &[
                    "DCSync",
                    "DumpSMSAPassword",
                    "HasSession",
                    "ReadGMSAPassword",
                    "ReadLAPSPassword",
                    "SyncLAPSPassword",
                ],
            },
            Subcategory {
                name: "Basic Object Manipulation",
                edge_types: &[
                    "AddMember",
                    "AddSelf",
                    "AllExtendedRights",
                    "ForceChangePassword",
                    "GenericAll",
                    "GenericWrite",
                    "Owns",
                    "WriteDacl",
                    "WriteOwner",
                ],
            },
            Subcategory {
                name: "Advanced Object Manipulation",
                edge_types: &[
                    "AddAllowedToAct",
                    "AddKeyCredentialLink",
                    "WriteAccountRestrictions",
                    "WriteSPN",
                ],
            },
            Subcategory {
                name: "Active Directory Certificate Services",
                edge_types: &[
                    "GoldenCert",
                    "ManageCA",
                    "ManageCertificates",
                    "ADCSESC1",
                    "ADCSESC3",
                    "ADCSESC4",
                    "ADCSESC6a",
                    "ADCSESC6b",
                    "ADCSESC9a",
                    "ADCSESC9b",
                    "ADCSESC10a",
                    "ADCSESC10b",
                ],
            },
        ],
    },
    Category {
        name: "Azure",
        subcategories: &[
            Subcategory {
                name: "Structure",
                edge_types: &[
                    "AZAppAdmin",
                    "AZCloudAppAdmin",
                    "AZContains",
                    "AZGlobalAdmin",
                    "AZHasRole",
                    "AZManagedIdentity",
                    "AZMemberOf",
                    "AZNodeResourceGroup",
                    "AZPrivilegedAuthAdmin",
                    "AZPrivilegedRoleAdmin",
                    "AZRunsAs",
                ],
            },
            Subcategory {
                name: "Basic AzureAD Object Manipulation",
                edge_types: &[
                    "AZAddMembers",
                    "AZAddOwner",
                    "AZAddSecret",
                    "AZExecuteCommand",
                    "AZGrant",
                    "AZGrantSelf",
                    "AZOwns",
                    "AZResetPassword",
                ],
            },
            Subcategory {
                name: "MS Graph App Role Abuses",
                edge_types: &[
                    "AZMGAddMember",
                    "AZMGAddOwner",
                    "AZMGAddSecret",
                    "AZMGGrantAppRoles",
                    "AZMGGrantRole",
                ],
            },
            Subcategory {
                name: "Secret/Credential Access",
                edge_types: &["AZGetCertificates", "AZGetKeys", "AZGetSecrets"],
            },
            Subcategory {
                name: "Basic AzureRM Object Manipulation",
                edge_types: &[
                    "AZAvereContributor",
                    "AZContributor",
                    "AZKeyVaultContributor",
                    "AZOwner",
                    "AZUserAccessAdministrator",
                    "AZVMAdminLogin",
                    "AZVMContributor",
                ],
            },
            Subcategory {
                name: "Advanced AzureRM Object Manipulation",
                edge_types: &[
                    "AZAKSContributor",
                    "AZAutomationContributor",
                    "AZLogicAppContributor",
                    "AZWebsiteContributor",
                ],
            },
        ],
    },
];
